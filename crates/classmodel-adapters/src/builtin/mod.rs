//! Built-in walkthrough classes.
//!
//! Each submodule defines one toy class of the classic object-orientation
//! walkthrough together with its scripted demonstration. [`all_entries`] is
//! the single entry-point; it returns them in walkthrough order.
//!
//! | Class         | Shows                                             |
//! |---------------|---------------------------------------------------|
//! | EmptyClass    | a class that is nothing but its docstring         |
//! | Bicycle       | constructor defaults, instance methods            |
//! | Person        | attributes added after construction               |
//! | Guitar        | methods that change own state                     |
//! | Car           | a method shadowing a class attribute              |
//! | Restaurant    | class attributes without a constructor            |
//! | Spy           | private attribute behind a getter/setter property |
//! | Circle        | computed properties                               |
//! | Robot         | class writes reaching non-shadowing instances     |
//! | ImprovedRobot | snapshotting a class value at construction        |
//! | Dog           | private state exposed through a read-only property|
//! | Sheep         | private class counter and a class method          |

use tracing::debug;

use classmodel_core::{
    application::CatalogEntry,
    domain::{DomainError, DomainResult, Value},
};

pub mod bicycle;
pub mod car;
pub mod circle;
pub mod dog;
pub mod empty;
pub mod guitar;
pub mod person;
pub mod restaurant;
pub mod robot;
pub mod sheep;
pub mod spy;

/// The approximation of π the walkthrough uses throughout.
pub const PI_APPROX: f64 = 3.1416;

/// Every built-in class, in walkthrough order.
pub fn all_entries() -> DomainResult<Vec<CatalogEntry>> {
    let entries = vec![
        empty::entry(1)?,
        bicycle::entry(2)?,
        person::entry(3)?,
        guitar::entry(4)?,
        car::entry(5)?,
        restaurant::entry(6)?,
        spy::entry(7)?,
        circle::entry(8)?,
        robot::entry(9)?,
        robot::improved_entry(10)?,
        dog::entry(11)?,
        sheep::entry(12)?,
    ];
    debug!(count = entries.len(), "built-in classes assembled");
    Ok(entries)
}

/// Check the argument count of a built-in method.
pub(crate) fn arity<'a>(
    operation: &str,
    args: &'a [Value],
    expected: usize,
) -> DomainResult<&'a [Value]> {
    if args.len() == expected {
        Ok(args)
    } else {
        Err(DomainError::InvalidArgument {
            operation: operation.to_owned(),
            reason: format!("takes {expected} argument(s) but {} were given", args.len()),
        })
    }
}

/// Round half away from zero to two decimals.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_ordered_and_unique() {
        let entries = all_entries().unwrap();
        let positions: Vec<_> = entries.iter().map(|e| e.position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(positions, sorted);

        let mut names: Vec<_> = entries.iter().map(|e| e.name().to_owned()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn every_entry_has_a_demo() {
        assert!(all_entries().unwrap().iter().all(|e| e.demo.is_some()));
    }

    #[test]
    fn round2_rounds_to_cents() {
        assert_eq!(round2(12.5664), 12.57);
        assert_eq!(round2(6.2832), 6.28);
        assert_eq!(round2(3.1416), 3.14);
    }

    #[test]
    fn arity_reports_counts() {
        let err = arity("tune", &[], 1).unwrap_err();
        assert!(err.to_string().contains("takes 1 argument(s) but 0 were given"));
    }
}
