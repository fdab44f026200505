//! Spy: a private real name reachable only through the `hidden_name`
//! property.
//!
//! The private key constant is module-private; nothing outside this module
//! can name it without going through the property.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{
        AttributeResolver, ClassDescriptor, DomainResult, InstanceId, ObjectSpace, Transcript,
        Value,
    },
    error::CoreResult,
};

pub const NAME: &str = "Spy";

const REAL_NAME: &str = "__real_name";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("A spy whose real name is hidden behind a property.")
        .param_into("real_name", REAL_NAME)
        .param("code_name")
        .property("hidden_name", hidden_name, Some(set_hidden_name))
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

fn hidden_name(space: &ObjectSpace, id: InstanceId) -> DomainResult<Value> {
    let owner = space.class_id(NAME)?;
    AttributeResolver::get_private(space, owner, id, REAL_NAME)
}

fn set_hidden_name(space: &mut ObjectSpace, id: InstanceId, value: Value) -> DomainResult<()> {
    value.expect_str("hidden_name")?;
    let owner = space.class_id(NAME)?;
    AttributeResolver::set_private(space, owner, id, REAL_NAME, value)?;
    Ok(())
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create(
        "tango",
        NAME,
        &["Pepin García Vazquez".into(), "red tango".into()],
    )?;

    match session.get("tango", REAL_NAME) {
        Ok(v) => out.say(v),
        Err(e) => out.say(format!("AttributeError: {e}")),
    }

    out.say("Inside the getter");
    out.say(session.property("tango", "hidden_name")?);

    out.say("Inside the setter");
    session.set_property("tango", "hidden_name", "Manuel Rojo Perez".into())?;
    out.say("Inside the getter");
    out.say(session.property("tango", "hidden_name")?);
    Ok(())
}
