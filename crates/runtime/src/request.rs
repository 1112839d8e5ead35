//! Recorded field requests and their GraphQL rendering.

use crate::argument::Arguments;

/// One field in a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRequest {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Arguments,
    /// Sub-selection; empty for leaf fields.
    pub selections: Vec<Selection>,
}

impl FieldRequest {
    /// A field without arguments or sub-selection.
    pub fn leaf(name: &str) -> Self {
        FieldRequest {
            alias: None,
            name: name.to_string(),
            arguments: Arguments::new(),
            selections: Vec::new(),
        }
    }

    /// A field requested with `arguments`, aliased when there are any.
    pub fn with_arguments(name: &str, arguments: Arguments) -> Self {
        FieldRequest {
            alias: arguments.alias_for(name),
            name: name.to_string(),
            arguments,
            selections: Vec::new(),
        }
    }

    /// Key the field's value is stored under in the response object.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    fn same_request(&self, other: &FieldRequest) -> bool {
        self.alias == other.alias && self.name == other.name && self.arguments == other.arguments
    }

    fn render(&self) -> String {
        let mut out = match &self.alias {
            Some(alias) => format!("{alias}: {}", self.name),
            None => self.name.clone(),
        };
        out.push_str(&self.arguments.render());
        if !self.selections.is_empty() {
            out.push(' ');
            out.push_str(&render_block(&self.selections));
        }
        out
    }
}

/// A field request or an inline fragment on a concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Field(FieldRequest),
    Fragment {
        type_condition: String,
        selections: Vec<Selection>,
    },
}

impl Selection {
    fn render(&self) -> String {
        match self {
            Selection::Field(field) => field.render(),
            Selection::Fragment {
                type_condition,
                selections,
            } => format!("... on {type_condition} {}", render_block(selections)),
        }
    }
}

/// Adds `selection` to `into`, merging it with an equal request.
///
/// Fields are equal when alias, name and arguments match; fragments when
/// the type condition matches. Merged entries keep their first position and
/// absorb the sub-selections of the newcomer.
pub(crate) fn merge_selection(into: &mut Vec<Selection>, selection: Selection) {
    let position = into
        .iter()
        .position(|existing| mergeable(existing, &selection));
    match (position, selection) {
        (Some(index), Selection::Field(incoming)) => {
            if let Selection::Field(current) = &mut into[index] {
                merge_all(&mut current.selections, incoming.selections);
            }
        }
        (Some(index), Selection::Fragment { selections: incoming, .. }) => {
            if let Selection::Fragment { selections, .. } = &mut into[index] {
                merge_all(selections, incoming);
            }
        }
        (None, selection) => into.push(selection),
    }
}

fn mergeable(existing: &Selection, incoming: &Selection) -> bool {
    match (existing, incoming) {
        (Selection::Field(current), Selection::Field(incoming)) => current.same_request(incoming),
        (
            Selection::Fragment { type_condition, .. },
            Selection::Fragment {
                type_condition: incoming,
                ..
            },
        ) => type_condition == incoming,
        _ => false,
    }
}

pub(crate) fn merge_all(into: &mut Vec<Selection>, selections: Vec<Selection>) {
    for selection in selections {
        merge_selection(into, selection);
    }
}

/// `{ a b(c: 1) { d } }`
pub(crate) fn render_block(selections: &[Selection]) -> String {
    format!("{{ {} }}", render_list(selections))
}

/// `a b(c: 1) { d }`
pub(crate) fn render_list(selections: &[Selection]) -> String {
    selections
        .iter()
        .map(Selection::render)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, selections: Vec<Selection>) -> Selection {
        Selection::Field(FieldRequest {
            selections,
            ..FieldRequest::leaf(name)
        })
    }

    #[test]
    fn test_duplicate_leaf_registered_once() {
        let mut selections = Vec::new();
        merge_selection(&mut selections, field("id", vec![]));
        merge_selection(&mut selections, field("name", vec![]));
        merge_selection(&mut selections, field("id", vec![]));
        assert_eq!(render_list(&selections), "id name");
    }

    #[test]
    fn test_same_field_merges_sub_selections() {
        let mut selections = Vec::new();
        merge_selection(&mut selections, field("hero", vec![field("id", vec![])]));
        merge_selection(
            &mut selections,
            field("hero", vec![field("id", vec![]), field("name", vec![])]),
        );
        assert_eq!(render_list(&selections), "hero { id name }");
    }

    #[test]
    fn test_different_arguments_are_kept_apart() {
        let mut selections = Vec::new();
        let plain = FieldRequest::leaf("greeting");
        let named = FieldRequest::with_arguments(
            "greeting",
            Arguments::new().arg("name", "Matic"),
        );
        let alias = named.alias.clone().unwrap_or_default();
        merge_selection(&mut selections, Selection::Field(plain));
        merge_selection(&mut selections, Selection::Field(named.clone()));
        merge_selection(&mut selections, Selection::Field(named));
        assert_eq!(
            render_list(&selections),
            format!("greeting {alias}: greeting(name: \"Matic\")")
        );
    }

    #[test]
    fn test_fragments_merge_by_type_condition() {
        let mut selections = Vec::new();
        merge_selection(
            &mut selections,
            Selection::Fragment {
                type_condition: "Droid".into(),
                selections: vec![field("primaryFunction", vec![])],
            },
        );
        merge_selection(
            &mut selections,
            Selection::Fragment {
                type_condition: "Human".into(),
                selections: vec![field("homePlanet", vec![])],
            },
        );
        merge_selection(
            &mut selections,
            Selection::Fragment {
                type_condition: "Droid".into(),
                selections: vec![field("name", vec![])],
            },
        );
        assert_eq!(
            render_list(&selections),
            "... on Droid { primaryFunction name } ... on Human { homePlanet }"
        );
    }

    #[test]
    fn test_response_key_prefers_alias() {
        let named = FieldRequest::with_arguments("human", Arguments::new().arg("id", "1"));
        assert_ne!(named.response_key(), "human");
        assert_eq!(FieldRequest::leaf("human").response_key(), "human");
    }
}
