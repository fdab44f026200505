//! Guitar: methods that create and update own attributes.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{
        AttributeResolver, BoundArgs, ClassDescriptor, DomainError, DomainResult, InstanceId,
        ObjectSpace, Transcript, Value,
    },
    error::CoreResult,
};

use super::arity;

pub const NAME: &str = "Guitar";

const STRINGS: i64 = 6;

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("A six-string guitar that can be tuned, played and broken.")
        .param("kind")
        .param("brand")
        .initializer(init)
        .method("tune", tune)
        .method("play", play)
        .method("break_string", break_string)
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

fn init(space: &mut ObjectSpace, id: InstanceId, _: &BoundArgs) -> DomainResult<()> {
    AttributeResolver::set(space, id, "strings", Value::from(STRINGS))?;
    Ok(())
}

/// `tuning` does not exist until the first call.
fn tune(space: &mut ObjectSpace, id: InstanceId, args: &[Value]) -> DomainResult<Value> {
    let args = arity("tune", args, 1)?;
    let note = args[0].expect_str("tune")?.to_owned();
    AttributeResolver::set(space, id, "tuning", Value::from(note))?;
    Ok(Value::from("Pliiiiiimm, pluummmm..."))
}

fn play(_: &mut ObjectSpace, _: InstanceId, args: &[Value]) -> DomainResult<Value> {
    arity("play", args, 0)?;
    Ok(Value::from("A beautiful melody plays..."))
}

fn break_string(space: &mut ObjectSpace, id: InstanceId, args: &[Value]) -> DomainResult<Value> {
    arity("break_string", args, 0)?;
    let left = AttributeResolver::get(space, id, "strings")?.expect_int("break_string")?;
    if left == 0 {
        return Err(DomainError::InvalidArgument {
            operation: "break_string".into(),
            reason: "no strings left".into(),
        });
    }
    AttributeResolver::set(space, id, "strings", Value::from(left - 1))?;
    Ok(Value::from("Plack!! One string less..."))
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("electric", NAME, &["electric".into(), "gibson".into()])?;

    out.say(session.call("electric", "tune", &["E".into()])?);
    out.say(session.get("electric", "tuning")?);
    out.say(session.call("electric", "play", &[])?);
    out.say(session.call("electric", "break_string", &[])?);
    out.say(session.get("electric", "strings")?);
    Ok(())
}
