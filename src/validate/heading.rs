//! Heading rank sequencing across the whole document.
//!
//! The document is flattened once into the ordered list of heading-like
//! entities. `heading_order` flags every heading whose rank jumps more
//! than one level deeper than its predecessor. `heading_start` flags the
//! first heading when its rank is not an allowed starting rank. Both are
//! attributed to the offending heading itself and are recomputed from
//! scratch on every call.

use crate::config::HeadingPolicy;
use crate::model::Entity;

use super::tree::DocumentTree;

pub const HEADING_ORDER: &str = "heading_order";
pub const HEADING_START: &str = "heading_start";

#[derive(Debug, Clone, Copy)]
pub struct HeadingRef<'a> {
    pub entity: &'a Entity,
    pub rank: u8,
}

/// One heading's verdict for one document-level check.
#[derive(Debug, Clone, Copy)]
pub struct HeadingVerdict<'a> {
    pub heading: HeadingRef<'a>,
    pub valid: bool,
}

pub fn collect_headings<'a>(tree: &DocumentTree<'a>, policy: &HeadingPolicy) -> Vec<HeadingRef<'a>> {
    tree.pre_order()
        .into_iter()
        .filter(|e| policy.is_heading(e))
        .map(|entity| HeadingRef {
            entity,
            rank: policy.rank_of(entity),
        })
        .collect()
}

/// Adjacent-pair scan. Going back up any number of levels is fine; going
/// down more than one is not. The first heading always passes here.
pub fn order_verdicts<'a>(headings: &[HeadingRef<'a>]) -> Vec<HeadingVerdict<'a>> {
    let mut previous: Option<u8> = None;
    headings
        .iter()
        .map(|&heading| {
            let valid = previous.is_none_or(|prev| heading.rank <= prev.saturating_add(1));
            previous = Some(heading.rank);
            HeadingVerdict { heading, valid }
        })
        .collect()
}

/// Verdict for the first heading only; empty when there are no headings.
pub fn start_verdict<'a>(
    headings: &[HeadingRef<'a>],
    policy: &HeadingPolicy,
) -> Option<HeadingVerdict<'a>> {
    headings.first().map(|&heading| HeadingVerdict {
        heading,
        valid: policy.is_allowed_start(heading.rank),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityId;

    fn order_violations<'a>(headings: &[HeadingRef<'a>]) -> Vec<&'a EntityId> {
        order_verdicts(headings)
            .into_iter()
            .filter(|v| !v.valid)
            .map(|v| &v.heading.entity.id)
            .collect()
    }

    fn headings(ranks: &[u8]) -> Vec<Entity> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, r)| Entity::new(format!("h{}", i), "core/heading").with_attr("level", *r))
            .collect()
    }

    fn violations(ranks: &[u8]) -> Vec<String> {
        let roots = headings(ranks);
        let tree = DocumentTree::build(&roots);
        let list = collect_headings(&tree, &HeadingPolicy::default());
        order_violations(&list)
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn skip_is_attributed_to_the_deeper_heading() {
        assert_eq!(violations(&[1, 3]), vec!["h1"]);
        assert_eq!(violations(&[2, 3, 4]), Vec::<String>::new());
        assert_eq!(violations(&[1, 2, 4, 2, 5]), vec!["h2", "h4"]);
        assert_eq!(violations(&[4, 1, 2]), Vec::<String>::new());
    }

    #[test]
    fn start_rank() {
        let policy = HeadingPolicy::default();
        let roots = headings(&[3, 4]);
        let tree = DocumentTree::build(&roots);
        let list = collect_headings(&tree, &policy);
        let verdict = start_verdict(&list, &policy).unwrap();
        assert!(!verdict.valid);
        assert_eq!(verdict.heading.entity.id.as_str(), "h0");

        let roots = headings(&[2, 3]);
        let tree = DocumentTree::build(&roots);
        let list = collect_headings(&tree, &policy);
        assert!(start_verdict(&list, &policy).unwrap().valid);
        assert!(start_verdict(&[], &policy).is_none());
    }

    #[test]
    fn nested_headings_are_scanned_in_document_order() {
        let roots = vec![
            Entity::new("h-top", "core/heading").with_attr("level", 1),
            Entity::new("group", "core/group").with_children(vec![
                Entity::new("p", "core/paragraph"),
                Entity::new("h-nested", "core/heading").with_attr("level", 3),
            ]),
        ];
        let tree = DocumentTree::build(&roots);
        let list = collect_headings(&tree, &HeadingPolicy::default());
        assert_eq!(list.len(), 2);
        let ids: Vec<&str> = order_violations(&list).iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["h-nested"]);
    }
}
