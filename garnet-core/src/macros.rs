// ------------------------------------------------------------------------------------------------
// Macros
// ------------------------------------------------------------------------------------------------

macro_rules! is_as {
    ($is_fn:ident, $variant:ident) => {
        /// Returns `true` if `self` is the corresponding variant, else `false`.
        pub fn $is_fn(&self) -> bool {
            matches!(self, Self::$variant)
        }
    };
    ($is_fn:ident, $variant:ident, $as_fn:ident, $ret_type:ty) => {
        /// Returns `true` if `self` is the corresponding variant, else `false`.
        pub fn $is_fn(&self) -> bool {
            matches!(self, Self::$variant(_))
        }

        /// Returns `Some(v)` if `self` is the corresponding variant, else `None`.
        pub fn $as_fn(&self) -> Option<&$ret_type> {
            match self {
                Self::$variant(v) => Some(v),
                _ => None,
            }
        }
    };
}

macro_rules! delegate {
    ($fn_name:ident, inner = $inner_name:ident) => {
        /// Delegate this call to the inner implementation.
        pub fn $fn_name(&self) -> bool {
            self.$inner_name.$fn_name()
        }
    };
}

macro_rules! optional_member {
    ($member_name:ident, $member_type:ty) => {
        paste::paste! {
            /// Returns `true` if this shape has a value for this member, else `false`.
            pub fn [<has_ $member_name>](&self) -> bool {
                self.$member_name.is_some()
            }

            /// Return the current value of this member.
            pub fn $member_name(&self) -> Option<&$member_type> {
                self.$member_name.as_ref()
            }

            /// Set the current value of this member.
            pub fn [<set_ $member_name>](&mut self, $member_name: $member_type) {
                self.$member_name = Some($member_name);
            }

            /// Set the current value of this member to `None`.
            pub fn [<unset_ $member_name>](&mut self) {
                self.$member_name = None;
            }
        }
    };
}

macro_rules! array_member {
    ($collection:ident, $member_name:ident, $member_type:ty) => {
        paste::paste! {
            /// Returns `true` if this member's collection has _any_ elements, else `false`.
            pub fn [<has_ $collection>](&self) -> bool {
                !self.$collection.is_empty()
            }

            /// Return an iterator over all elements in this member's collection.
            pub fn $collection(&self) -> impl Iterator<Item = &$member_type> {
                self.$collection.iter()
            }

            /// Add an element to this member's collection.
            pub fn [<add_ $member_name>](&mut self, $member_name: $member_type) {
                self.$collection.push($member_name);
            }

            /// Add all these elements to this member's collection.
            pub fn [<append_ $collection>](&mut self, $collection: &[$member_type]) {
                for member in $collection {
                    self.[<add_ $member_name>](member.clone());
                }
            }

            /// Remove any element, equal to the provided value, from this member's collection.
            pub fn [<remove_ $member_name>](&mut self, $member_name: &$member_type) {
                self.$collection.retain(|item| item != $member_name)
            }
        }
    };
}

macro_rules! has_traits_impl {
    ($struct_name:ident . $field_name:ident) => {
        impl HasTraits for $struct_name {
            fn traits(&self) -> &AppliedTraits {
                &self.$field_name
            }

            fn traits_mut(&mut self) -> &mut AppliedTraits {
                &mut self.$field_name
            }

            fn apply_with_value(
                &mut self,
                id: ShapeID,
                value: Option<Value>,
            ) -> $crate::error::Result<()> {
                if id.is_member() {
                    return Err($crate::error::ErrorKind::ShapeIDExpected(id).into());
                } else if let Some(trait_value) = self.trait_named(&id) {
                    let new_value = $crate::model::shapes::merge_traits(&id, trait_value, &value)?;
                    let _ = self.$field_name.insert(id, new_value);
                } else {
                    let _ = self.$field_name.insert(id, value);
                }
                Ok(())
            }
        }
    };
}
