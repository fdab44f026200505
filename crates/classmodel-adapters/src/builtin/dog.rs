//! Dog: private instance state that grows through a method and is read
//! through a property.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{
        AttributeResolver, BoundArgs, ClassDescriptor, DomainError, DomainResult, InstanceId,
        ObjectSpace, Transcript, Value,
    },
    error::CoreResult,
};

use super::arity;

pub const NAME: &str = "Dog";

const TRICKS: &str = "__tricks";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("A dog that learns tricks.")
        .attribute("__order", "Canid")
        .param("name")
        .param_into("breed", "__breed")
        .initializer(init)
        .method("teach_trick", teach_trick)
        .property("tricks", tricks, None)
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

fn init(space: &mut ObjectSpace, id: InstanceId, _: &BoundArgs) -> DomainResult<()> {
    let owner = space.class_id(NAME)?;
    AttributeResolver::set_private(space, owner, id, TRICKS, Value::List(Vec::new()))?;
    Ok(())
}

fn teach_trick(space: &mut ObjectSpace, id: InstanceId, args: &[Value]) -> DomainResult<Value> {
    let args = arity("teach_trick", args, 1)?;
    let trick = args[0].expect_str("teach_trick")?.to_owned();
    let owner = space.class_id(NAME)?;
    match AttributeResolver::private_mut(space, owner, id, TRICKS)? {
        Value::List(items) => items.push(Value::from(trick)),
        other => {
            return Err(DomainError::InvalidArgument {
                operation: "teach_trick".into(),
                reason: format!("trick list is a {}", other.type_name()),
            });
        }
    }
    Ok(Value::None)
}

fn tricks(space: &ObjectSpace, id: InstanceId) -> DomainResult<Value> {
    let owner = space.class_id(NAME)?;
    AttributeResolver::get_private(space, owner, id, TRICKS)
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("toby", NAME, &["Toby".into(), "Mastiff".into()])?;
    out.say(session.get("toby", "name")?);
    out.say(session.property("toby", "tricks")?);

    session.call("toby", "teach_trick", &["Give a paw".into()])?;
    session.call("toby", "teach_trick", &["Play dead".into()])?;
    out.say(session.property("toby", "tricks")?);
    Ok(())
}
