//! Car: a class attribute shared by every car until one method writes its
//! own copy.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{
        AttributeResolver, ClassDescriptor, DomainResult, InstanceId, ObjectSpace, Transcript,
        Value,
    },
    error::CoreResult,
};

use super::arity;

pub const NAME: &str = "Car";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("Cars share the wheel count; model and color are their own.")
        .attribute("wheels", 4)
        .param("model")
        .param("color")
        .method("puncture_tire", puncture_tire)
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

/// Writes through the instance, so only this car loses a wheel.
fn puncture_tire(space: &mut ObjectSpace, id: InstanceId, args: &[Value]) -> DomainResult<Value> {
    arity("puncture_tire", args, 0)?;
    AttributeResolver::set(space, id, "wheels", Value::from(3))?;
    Ok(Value::None)
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("white_peugeot", NAME, &["Peugeot 205".into(), "white".into()])?;
    session.create("yellow_seat", NAME, &["Seat Ibiza".into(), "yellow".into()])?;

    out.say(session.get("white_peugeot", "model")?);
    out.say(session.get("yellow_seat", "model")?);
    out.say(session.get("white_peugeot", "wheels")?);
    out.say(session.get("yellow_seat", "wheels")?);

    session.call("white_peugeot", "puncture_tire", &[])?;
    out.say(session.get("white_peugeot", "wheels")?);
    out.say(session.get("yellow_seat", "wheels")?);

    session.create("red_ford", NAME, &["Ford Mondeo".into(), "red".into()])?;
    out.say(session.get("red_ford", "wheels")?);
    out.say(format!(
        "class {NAME}.wheels is still {}",
        session.get_class_attribute(NAME, "wheels")?
    ));
    Ok(())
}
