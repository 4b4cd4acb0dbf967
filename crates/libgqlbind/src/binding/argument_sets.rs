use crate::binding::ArgumentBinding;
use crate::binding::DirectiveDefBinding;
use crate::binding::ObjectBinding;
use indexmap::IndexMap;

/// Collects every non-empty argument list owned by a field or a directive
/// definition, keyed by its accessor key.
///
/// Values borrow the owners' lists, so the map always reflects the graph as
/// it is when this is called. If two owners produce the same key the later
/// owner's list replaces the earlier one in place.
pub fn collect_argument_sets<'graph>(
    objects: &'graph [ObjectBinding],
    directives: &'graph IndexMap<String, DirectiveDefBinding>,
) -> IndexMap<String, &'graph [ArgumentBinding]> {
    let mut sets: IndexMap<String, &'graph [ArgumentBinding]> = IndexMap::new();

    let field_sets = objects.iter()
        .flat_map(|object| object.fields())
        .filter(|field| !field.args().is_empty())
        .map(|field| (field.args_accessor_key(), field.args()));
    let directive_sets = directives.values()
        .filter(|directive| !directive.args().is_empty())
        .map(|directive| (directive.args_accessor_key(), directive.args()));

    for (accessor_key, args) in field_sets.chain(directive_sets) {
        if let Some(replaced) = sets.insert(accessor_key, args) {
            log::debug!(
                "argument set with {} args was replaced by a later owner with the same accessor key",
                replaced.len(),
            );
        }
    }

    log::debug!("collected {} argument sets", sets.len());
    sets
}
