/*!
A depth-first walker over the transitive closure of a shape. Each shape id is yielded exactly
once, members are followed in model order, and prelude targets are treated as terminals. A
member target that resolves to neither the prelude nor a model shape ends the walk with an
`UnknownShape` error.
*/

use crate::error::{ErrorKind, Result};
use crate::model::identity::HasIdentity;
use crate::model::shapes::{ShapeKind, TopLevelShape};
use crate::model::{Model, ShapeID};
use crate::prelude::is_prelude_shape;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A lazy, finite, iterator over all shapes reachable from a root shape id.
///
#[derive(Debug)]
pub struct ShapeWalker<'a> {
    model: &'a Model,
    stack: Vec<ShapeID>,
    seen: HashSet<ShapeID>,
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Walk the transitive closure of `root` within `model`.
///
pub fn walk<'a>(model: &'a Model, root: &ShapeID) -> ShapeWalker<'a> {
    ShapeWalker {
        model,
        stack: vec![root.clone()],
        seen: Default::default(),
    }
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a> Iterator for ShapeWalker<'a> {
    type Item = Result<&'a TopLevelShape>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if !self.seen.insert(id.clone()) {
                continue;
            }
            if is_prelude_shape(&id) {
                continue;
            }
            let shape = match self.model.shape(&id) {
                Some(shape) => shape,
                None => return Some(Err(ErrorKind::UnknownShape(id.to_string()).into())),
            };
            self.push_children(shape);
            return Some(Ok(shape));
        }
        None
    }
}

impl<'a> ShapeWalker<'a> {
    ///
    /// Push the child targets of `shape` so that the first child in model order is popped first.
    ///
    fn push_children(&mut self, shape: &TopLevelShape) {
        let mut children: Vec<ShapeID> = Default::default();
        match shape.body() {
            ShapeKind::Simple(_) => {}
            ShapeKind::List(body) | ShapeKind::Set(body) => {
                children.push(body.member().target().clone());
            }
            ShapeKind::Map(body) => {
                children.push(body.key().target().clone());
                children.push(body.value().target().clone());
            }
            ShapeKind::Structure(body) | ShapeKind::Union(body) => {
                children.extend(body.members().map(|member| member.target().clone()));
            }
            ShapeKind::Service(body) => {
                children.extend(body.operations().cloned());
            }
            ShapeKind::Operation(body) => {
                children.extend(body.input().cloned());
                children.extend(body.output().cloned());
                children.extend(body.errors().cloned());
            }
        }
        for child in children.into_iter().rev() {
            if !self.seen.contains(&child) {
                self.stack.push(child);
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------

impl Model {
    ///
    /// Walk the transitive closure of `root` within this model; see
    /// [`walk`](walk/fn.walk.html).
    ///
    pub fn walk(&self, root: &ShapeID) -> ShapeWalker<'_> {
        walk(self, root)
    }
}
