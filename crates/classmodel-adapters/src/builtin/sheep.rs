//! Sheep: a private class counter bumped by every construction.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{
        AttributeResolver, BoundArgs, ClassDescriptor, ClassId, DomainResult, InstanceId,
        ObjectSpace, Transcript, Value,
    },
    error::CoreResult,
};

use super::arity;

pub const NAME: &str = "Sheep";

const COUNT: &str = "__count";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("Sheep count themselves into the flock.")
        .attribute(COUNT, 0)
        .param("name")
        .initializer(join_flock)
        .class_method("total", total)
        .class_method("census", census)
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

fn join_flock(space: &mut ObjectSpace, id: InstanceId, _: &BoundArgs) -> DomainResult<()> {
    let owner = space.instance(id)?.class();
    let count = AttributeResolver::get_private_class(space, owner, COUNT)?.expect_int("Sheep")?;
    AttributeResolver::set_private_class(space, owner, COUNT, Value::from(count + 1))?;
    Ok(())
}

fn total(space: &mut ObjectSpace, class: ClassId, args: &[Value]) -> DomainResult<Value> {
    arity("total", args, 0)?;
    AttributeResolver::get_private_class(space, class, COUNT)
}

fn census(space: &mut ObjectSpace, class: ClassId, args: &[Value]) -> DomainResult<Value> {
    arity("census", args, 0)?;
    let count = total(space, class, args)?;
    Ok(Value::from(format!("{count} sheep in the flock!")))
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("mindy", NAME, &["Mindy".into()])?;
    session.create("teresa", NAME, &["Teresa".into()])?;
    session.create("spotty", NAME, &["Spotty".into()])?;

    let census = session.call_class(NAME, "census", &[])?;
    out.say(census.to_string());
    Ok(())
}
