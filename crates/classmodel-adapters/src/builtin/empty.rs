//! EmptyClass: no attributes, no methods, only a docstring.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{ClassDescriptor, DomainResult, Transcript},
    error::CoreResult,
};

pub const NAME: &str = "EmptyClass";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("An empty class with no attributes or methods.")
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("nothing", NAME, &[])?;
    out.say(format!("has color? {}", session.has("nothing", "color")));

    out.separator();
    match session.get("nothing", "color") {
        Err(err) if err.is_attribute_not_found() => out.say(format!("AttributeError: {err}")),
        other => out.say(other?),
    }

    out.separator();
    session.set("nothing", "color", "green".into())?;
    out.say(session.get("nothing", "color")?);
    Ok(())
}
