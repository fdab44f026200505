//! Circle: values computed on every read rather than stored.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{
        AttributeResolver, ClassDescriptor, DomainResult, InstanceId, ObjectSpace, Transcript,
        Value,
    },
    error::CoreResult,
};

use super::{PI_APPROX, round2};

pub const NAME: &str = "Circle";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("A circle with computed perimeter and area.")
        .param("radius")
        .property("perimeter", perimeter, None)
        .property("area", area, None)
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

fn radius(space: &ObjectSpace, id: InstanceId) -> DomainResult<f64> {
    AttributeResolver::get(space, id, "radius")?.expect_float("radius")
}

fn perimeter(space: &ObjectSpace, id: InstanceId) -> DomainResult<Value> {
    Ok(Value::from(round2(radius(space, id)? * 2.0 * PI_APPROX)))
}

fn area(space: &ObjectSpace, id: InstanceId) -> DomainResult<Value> {
    Ok(Value::from(round2(radius(space, id)?.powi(2) * PI_APPROX)))
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("small", NAME, &[1.into()])?;
    session.create("large", NAME, &[2.into()])?;

    out.say(session.property("small", "area")?);
    out.say(session.property("large", "area")?);
    out.say(session.property("small", "perimeter")?);
    out.say(session.property("large", "perimeter")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classmodel_core::application::ObjectSession;
    use classmodel_core::domain::DomainError;
    use classmodel_core::error::CoreError;

    fn session() -> ObjectSession {
        let mut session = ObjectSession::new();
        session.define_class(entry(0).unwrap().class).unwrap();
        session
    }

    #[test]
    fn computed_values_are_rounded() {
        let mut s = session();
        s.create("c", NAME, &[2.into()]).unwrap();
        assert_eq!(s.property("c", "area").unwrap(), Value::from(12.57));
        assert_eq!(s.property("c", "perimeter").unwrap(), Value::from(12.57));

        s.create("unit", NAME, &[1.into()]).unwrap();
        assert_eq!(s.property("unit", "area").unwrap(), Value::from(3.14));
        assert_eq!(s.property("unit", "perimeter").unwrap(), Value::from(6.28));
    }

    #[test]
    fn properties_follow_the_radius() {
        let mut s = session();
        s.create("c", NAME, &[1.into()]).unwrap();
        s.set("c", "radius", 2).unwrap();
        assert_eq!(s.property("c", "area").unwrap(), Value::from(12.57));
    }

    #[test]
    fn properties_are_read_only() {
        let mut s = session();
        s.create("c", NAME, &[1.into()]).unwrap();
        let err = s.set_property("c", "area", 1.0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::ReadOnlyProperty { .. })
        ));
    }
}
