/*!
Double-dispatch over shape kinds. Implementations override the methods for the kinds they care
about; everything else lands in `default_shape`, which handles scalar-like shapes uniformly.
*/

use crate::model::shapes::{
    ListOrSet, Map, Operation, Service, Simple, StructureOrUnion, TopLevelShape,
};

// ------------------------------------------------------------------------------------------------
// Macros
// ------------------------------------------------------------------------------------------------

macro_rules! visit_fn {
    ($fn_name:ident, $shape_type:ty, $doc:expr) => {
        #[doc = $doc]
        #[allow(unused_variables)]
        fn $fn_name(&mut self, shape: &TopLevelShape, body: &$shape_type) -> Self::Output {
            self.default_shape(shape)
        }
    };
}

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A trait implemented by tools that dispatch on the kind of a single shape; emitters implement
/// this so that each shape kind routes to a dedicated method.
///
pub trait ShapeVisitor {
    /// The value returned by each visit method.
    type Output;

    /// Called for any shape kind without a dedicated override.
    fn default_shape(&mut self, shape: &TopLevelShape) -> Self::Output;

    visit_fn! { simple_shape, Simple, "Called for each simple shape" }
    visit_fn! { list, ListOrSet, "Called for each list shape" }
    visit_fn! { set, ListOrSet, "Called for each set shape" }
    visit_fn! { map, Map, "Called for each map shape" }
    visit_fn! { structure, StructureOrUnion, "Called for each structure shape" }
    visit_fn! { union, StructureOrUnion, "Called for each union shape" }
    visit_fn! { service, Service, "Called for each service shape" }
    visit_fn! { operation, Operation, "Called for each operation shape" }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Dispatch `shape` to the visitor method for its kind and return the result.
///
pub fn visit_shape<V>(visitor: &mut V, shape: &TopLevelShape) -> V::Output
where
    V: ShapeVisitor,
{
    use crate::model::shapes::ShapeKind;
    match shape.body() {
        ShapeKind::Simple(body) => visitor.simple_shape(shape, body),
        ShapeKind::List(body) => visitor.list(shape, body),
        ShapeKind::Set(body) => visitor.set(shape, body),
        ShapeKind::Map(body) => visitor.map(shape, body),
        ShapeKind::Structure(body) => visitor.structure(shape, body),
        ShapeKind::Union(body) => visitor.union(shape, body),
        ShapeKind::Service(body) => visitor.service(shape, body),
        ShapeKind::Operation(body) => visitor.operation(shape, body),
    }
}
