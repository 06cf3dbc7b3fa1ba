use super::grouping::OperationGroups;
use super::operations::OperationEntry;

/// Case-insensitive substring match against method, path, summary, and group.
pub fn matches(op: &OperationEntry<'_>, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    op.method.as_str().to_lowercase().contains(&needle)
        || op.path.to_lowercase().contains(&needle)
        || op.group.to_lowercase().contains(&needle)
        || op
            .summary()
            .is_some_and(|s| s.to_lowercase().contains(&needle))
}

/// Keep only matching operations; groups left empty are dropped.
pub fn filter_groups<'v, 'a>(groups: OperationGroups<'v, 'a>, term: &str) -> OperationGroups<'v, 'a> {
    if term.trim().is_empty() {
        return groups;
    }
    groups
        .into_iter()
        .filter_map(|(key, ops)| {
            let kept: Vec<_> = ops.into_iter().filter(|op| matches(op, term)).collect();
            (!kept.is_empty()).then_some((key, kept))
        })
        .collect()
}
