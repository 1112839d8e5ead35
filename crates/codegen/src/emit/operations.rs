use super::Generator;
use crate::schema::TypeKind;

/// `Operation` impls for the root types present in the schema.
///
/// A root that is not an object type is skipped.
pub(crate) fn emit_operations(generator: &Generator<'_>) -> Vec<String> {
    let rt = generator.rt();
    let roots = generator.schema().roots();
    [
        (&roots.query, "Query"),
        (&roots.mutation, "Mutation"),
        (&roots.subscription, "Subscription"),
    ]
    .into_iter()
    .filter_map(|(root, kind)| {
        let root = root.as_deref()?;
        if generator.schema().kind_of(root) != Some(TypeKind::Object) {
            return None;
        }
        Some(format!(
            "impl {rt}::Operation for {} {{
    const KIND: {rt}::OperationKind = {rt}::OperationKind::{kind};
}}",
            generator.named_path(root)
        ))
    })
    .collect()
}
