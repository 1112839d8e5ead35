use std::fmt;

use crate::scope::{Polymorphic, PossibleType};
use crate::selection::SelectionSet;

/// One concrete-type branch of a polymorphic selection.
///
/// The selection is rebound from the concrete type's scope to the
/// interface or union scope `P`, which is only allowed when the concrete
/// type is one of `P`'s possible types.
pub struct Case<T, P> {
    type_name: &'static str,
    selection: SelectionSet<T, P>,
}

impl<T: 'static, P: Polymorphic> Case<T, P> {
    pub fn new<C: PossibleType<P>>(selection: &SelectionSet<T, C>) -> Self {
        Case {
            type_name: C::TYPE_NAME,
            selection: selection.clone().cast(),
        }
    }

    /// `__typename` value this case handles.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn selection(&self) -> &SelectionSet<T, P> {
        &self.selection
    }
}

impl<T, P> fmt::Debug for Case<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("type_name", &self.type_name)
            .field("selection", &self.selection)
            .finish()
    }
}
