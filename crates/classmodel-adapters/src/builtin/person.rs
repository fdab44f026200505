//! Person: every attribute comes from the constructor, and more can be added
//! to a single instance at any time.

use classmodel_core::{
    application::{CatalogEntry, Stage},
    domain::{ClassDescriptor, DomainResult, Transcript},
    error::CoreResult,
};

pub const NAME: &str = "Person";

pub fn entry(position: usize) -> DomainResult<CatalogEntry> {
    let class = ClassDescriptor::builder(NAME)
        .doc("A person with name, surname, height and age.")
        .param("name")
        .param("surname")
        .param("height")
        .param("age")
        .build()?;
    Ok(CatalogEntry::new(class, position).with_demo(demo))
}

fn demo(session: &mut dyn Stage, out: &mut Transcript) -> CoreResult<()> {
    session.create(
        "pepin",
        NAME,
        &["Pepin".into(), "García Vazquez".into(), 1.8.into(), 45.into()],
    )?;
    out.say(session.get("pepin", "name")?);

    session.create(
        "paloma",
        NAME,
        &["Paloma".into(), "Fernandez Izquierdo".into(), 1.65.into(), 30.into()],
    )?;
    out.say(session.get("paloma", "name")?);

    session.set("paloma", "age", 31.into())?;
    out.say(session.get("paloma", "age")?);

    // Not declared anywhere: lives on this one instance only.
    session.set("paloma", "hair_color", "black".into())?;
    out.say(session.get("paloma", "hair_color")?);
    out.say(format!(
        "pepin has hair_color: {}",
        session.has("pepin", "hair_color")
    ));

    session.unbind("paloma")?;
    session.unbind("pepin")?;
    Ok(())
}
