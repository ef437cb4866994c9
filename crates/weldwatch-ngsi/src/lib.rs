//! NGSI v2 entity model: typed attribute values, per-schema entities
//! with closed attribute sets, the wire codec rules and
//! update-notification filtering used to exchange context data with a
//! broker such as Orion.

mod attribute;
mod entity;
mod error;
mod notification;

pub use attribute::{BooleanAttr, NumberAttr, TextAttr};
pub use entity::{decode_entity, encode_entity, GenericEntity, NgsiEntity, URN_PREFIX};
pub use error::{NgsiError, NgsiResult};
pub use notification::EntityUpdateNotification;
