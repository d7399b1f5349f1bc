//! Derivation of the filter groups offered for a category.
//!
//! Pure function over the configured groups and the tag assignments
//! currently observed in the category: a tag is offered only while at least
//! one resource (or one of its files) carries it, and a group left without
//! tags is dropped.

use std::collections::{HashMap, HashSet};

use crate::common::{ResourceId, TagId};
use crate::domains::tag::models::{
    DynamicAvailableFilterTags, DynamicTagGroup, TagGroupConfig, TagOption, TagUsage,
};

/// Builds the filter groups for a category, keeping configured group order
/// and configured tag order inside each group.
pub fn build_available_filters(
    groups: Vec<TagGroupConfig>,
    usages: &[TagUsage],
) -> DynamicAvailableFilterTags {
    let mut usages_by_tag: HashMap<TagId, Vec<&TagUsage>> = HashMap::new();
    for usage in usages {
        usages_by_tag.entry(usage.tag_id).or_default().push(usage);
    }

    groups
        .into_iter()
        .filter_map(|group| {
            let options: Vec<TagOption> = group
                .tags
                .iter()
                .filter_map(|tag| {
                    let resource_count = usages_by_tag
                        .get(&tag.id)
                        .map(|observed| count_resources(&group, observed))
                        .unwrap_or(0);

                    (resource_count > 0).then(|| TagOption {
                        tag: tag.clone(),
                        resource_count,
                    })
                })
                .collect();

            if options.is_empty() {
                return None;
            }

            Some(DynamicTagGroup {
                id: group.id,
                name: group.name,
                category_id: group.category_id,
                applies_to_resources: group.applies_to_resources,
                applies_to_files: group.applies_to_files,
                tags: options,
            })
        })
        .collect()
}

fn count_resources(group: &TagGroupConfig, observed: &[&TagUsage]) -> usize {
    observed
        .iter()
        .filter(|u| u.counts_for(group))
        .map(|u| u.resource_id)
        .collect::<HashSet<ResourceId>>()
        .len()
}
