//! Restaurant: class attributes only, no constructor parameters.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{ClassDescriptor, DomainResult, Transcript},
    error::CoreResult,
};

pub const NAME: &str = "Restaurant";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("Every restaurant starts in Gijón and open.")
        .attribute("location", "Gijón")
        .attribute("open", true)
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create("pizzeria", NAME, &[])?;
    out.say(session.get("pizzeria", "location")?);
    out.say(session.get("pizzeria", "open")?);

    session.create("kebab", NAME, &[])?;
    session.set("kebab", "open", false.into())?;
    out.say(session.get("kebab", "location")?);
    out.say(session.get("kebab", "open")?);

    // Dropping the override brings the class value back.
    session.delete("kebab", "open")?;
    out.say(session.get("kebab", "open")?);
    Ok(())
}
