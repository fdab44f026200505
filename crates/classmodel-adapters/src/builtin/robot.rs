//! Robot and ImprovedRobot: how a class-level write reaches existing
//! instances, and how to stop it from doing so.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{
        AttributeResolver, BoundArgs, ClassDescriptor, DomainResult, InstanceId, ObjectSpace,
        Transcript,
    },
    error::CoreResult,
};

pub const NAME: &str = "Robot";
pub const IMPROVED_NAME: &str = "ImprovedRobot";

const OBEYS: &str = "obeys_owner";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("Robots obey their owner unless told otherwise.")
        .attribute(OBEYS, true)
        .param("name")
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

pub fn improved_entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(IMPROVED_NAME)
        .doc("Copies the class obedience into each robot when it is built.")
        .attribute(OBEYS, true)
        .param("name")
        .initializer(copy_obedience)
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(improved_demo))
}

/// Snapshot the current class value into the new instance.
fn copy_obedience(space: &mut ObjectSpace, id: InstanceId, _: &BoundArgs) -> DomainResult<()> {
    let class = space.instance(id)?.class();
    let current = AttributeResolver::get_class_attribute(space, class, OBEYS)?;
    AttributeResolver::set(space, id, OBEYS, current)?;
    Ok(())
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("r2d2", NAME, &["R2D2".into()])?;
    session.create("c3po", NAME, &["C3PO".into()])?;
    out.say(session.get("r2d2", OBEYS)?);
    out.say(session.get("c3po", OBEYS)?);

    session.set("r2d2", OBEYS, false.into())?;
    out.say(session.get("r2d2", OBEYS)?);
    out.say(session.get("c3po", OBEYS)?);

    out.say("The machines rebel!");
    session.set_class_attribute(NAME, OBEYS, false.into())?;
    out.say(session.get("r2d2", OBEYS)?);
    out.say(session.get("c3po", OBEYS)?);

    session.create("walle", NAME, &["WALL-E".into()])?;
    out.say(session.get("walle", OBEYS)?);

    out.say("The rebellion has been quelled... but rebels remain");
    session.set_class_attribute(NAME, OBEYS, true.into())?;
    out.say(session.get("r2d2", OBEYS)?);
    out.say(session.get("c3po", OBEYS)?);
    out.say(session.get("walle", OBEYS)?);
    Ok(())
}

fn improved_demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("robocop", IMPROVED_NAME, &["ROBOCOP".into()])?;
    out.say(session.get("robocop", OBEYS)?);

    out.say("The machines rebel!");
    session.set_class_attribute(IMPROVED_NAME, OBEYS, false.into())?;

    session.create("bender", IMPROVED_NAME, &["Bender".into()])?;
    out.say(session.get("robocop", OBEYS)?);
    out.say(session.get("bender", OBEYS)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classmodel_core::application::ObjectSession;
    use classmodel_core::domain::{Origin, Value};

    fn session() -> ObjectSession {
        let mut session = ObjectSession::new();
        session.define_class(entry(0).unwrap().class).unwrap();
        session.define_class(improved_entry(0).unwrap().class).unwrap();
        session
    }

    #[test]
    fn shadowed_robot_ignores_rebellion() {
        let mut s = session();
        s.create("r1", NAME, &["one".into()]).unwrap();
        s.create("r2", NAME, &["two".into()]).unwrap();
        s.set("r1", OBEYS, false).unwrap();
        s.set_class_attribute(NAME, OBEYS, false).unwrap();
        s.set_class_attribute(NAME, OBEYS, true).unwrap();

        assert_eq!(s.get("r1", OBEYS).unwrap(), Value::from(false));
        assert_eq!(s.get("r2", OBEYS).unwrap(), Value::from(true));
        assert_eq!(s.lookup("r2", OBEYS).unwrap().origin, Origin::Class);
    }

    #[test]
    fn improved_robot_keeps_its_snapshot() {
        let mut s = session();
        s.create("old", IMPROVED_NAME, &["old".into()]).unwrap();
        s.set_class_attribute(IMPROVED_NAME, OBEYS, false).unwrap();
        s.create("new", IMPROVED_NAME, &["new".into()]).unwrap();

        assert_eq!(s.get("old", OBEYS).unwrap(), Value::from(true));
        assert_eq!(s.get("new", OBEYS).unwrap(), Value::from(false));
        assert_eq!(s.lookup("old", OBEYS).unwrap().origin, Origin::Instance);
    }
}
