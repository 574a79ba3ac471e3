//! ReferenceWriter port - visitor fed by a record's reference serialization

use crate::domain::entities::ReferenceKind;
use crate::domain::value_objects::ObjectId;

/// Receives every identity a record refers to, tagged with the edge kind
pub trait ReferenceWriter {
    fn write_reference(&mut self, kind: ReferenceKind, id: ObjectId);
}
