//! Object model domain layer.
//!
//! Pure logic, no I/O:
//!
//! - **Value / AttrName**: dynamic values and validated attribute names
//! - **ClassDescriptor / Instance**: templates and the objects built from them
//! - **ObjectSpace**: arena owning both, addressed by handles
//! - **AttributeResolver**: instance-over-class lookup rules
//! - **Scenario**: serde model of scripted walkthroughs
//! - **Transcript**: the lines a walkthrough prints

pub mod attribute;
pub mod class;
pub mod error;
pub mod instance;
pub mod resolver;
pub mod scenario;
pub mod space;
pub mod transcript;
pub mod value;

pub use attribute::{AttrName, Origin, Visibility, mangle};
pub use class::{
    BoundArgs, ClassBuilder, ClassDescriptor, ClassId, ClassMethod, Constructor, Getter,
    Initializer, InstanceMethod, Param, Property, Setter,
};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use instance::{Instance, InstanceId};
pub use resolver::{AttributeResolver, Resolved};
pub use scenario::{ClassDecl, InstanceDecl, ParamDecl, Scenario, Step};
pub use space::{ObjectSpace, REMOVED_CLASS};
pub use transcript::{DEFAULT_SEPARATOR, Transcript};
pub use value::Value;
