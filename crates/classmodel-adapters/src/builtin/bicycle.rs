//! Bicycle: constructor with a default argument and plain instance methods.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{
        AttributeResolver, BoundArgs, ClassDescriptor, DomainResult, InstanceId, ObjectSpace,
        Transcript, Value,
    },
    error::CoreResult,
};

use super::{PI_APPROX, arity};

pub const NAME: &str = "Bicycle";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("An example bicycle class.")
        .param("owner")
        .param("color")
        .param_unstored("radius", Some(Value::from(2)))
        .initializer(init)
        .method("brake", brake)
        .method("shift_up", shift_up)
        .method("shift_down", shift_down)
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

// Only the perimeter is kept; the radius itself is not stored.
fn init(space: &mut ObjectSpace, id: InstanceId, args: &BoundArgs) -> DomainResult<()> {
    let radius = match args.get("radius") {
        Some(v) => v.expect_float("Bicycle()")?,
        None => 2.0,
    };
    AttributeResolver::set(space, id, "perimeter", Value::from(radius * 2.0 * PI_APPROX))?;
    Ok(())
}

fn brake(_: &mut ObjectSpace, _: InstanceId, args: &[Value]) -> DomainResult<Value> {
    arity("brake", args, 0)?;
    Ok(Value::from("The bicycle brakes"))
}

/// Returns the number of gears shifted.
fn shift_up(_: &mut ObjectSpace, _: InstanceId, args: &[Value]) -> DomainResult<Value> {
    let args = arity("shift_up", args, 1)?;
    Ok(Value::from(args[0].expect_int("shift_up")?))
}

fn shift_down(_: &mut ObjectSpace, _: InstanceId, args: &[Value]) -> DomainResult<Value> {
    arity("shift_down", args, 0)?;
    Ok(Value::from("Shifting down"))
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("dani_bike", NAME, &["Dani".into(), "yellow".into()])?;
    session.create("vicente_bike", NAME, &["Vicente".into(), "red".into()])?;

    out.say(session.call("dani_bike", "shift_down", &[])?);
    let gears = session.call("dani_bike", "shift_up", &[2.into()])?;
    out.say(format!("Shifting up {gears} gears"));
    out.say(session.call("dani_bike", "brake", &[])?);

    for bike in ["dani_bike", "vicente_bike"] {
        out.say(session.get(bike, "owner")?);
        out.say(session.get(bike, "color")?);
    }

    session.set("dani_bike", "color", "white".into())?;
    out.say(session.get("dani_bike", "owner")?);
    out.say(session.get("dani_bike", "color")?);
    out.say(session.get("dani_bike", "perimeter")?);

    session.unbind("dani_bike")?;
    session.unbind("vicente_bike")?;
    Ok(())
}
