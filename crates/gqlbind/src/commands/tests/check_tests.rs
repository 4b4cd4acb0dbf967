use crate::commands::binding_inputs::BoundSchema;
use crate::commands::check::summarize;
use libgqlbind::binding::ModelTypeResolver;
use libgqlbind::binding::ObjectGraphBuilder;
use libgqlbind::binding::SchemaDirectiveBinder;
use libgqlbind::schema::Schema;

fn bind_sdl(sdl: &str) -> BoundSchema {
    let schema = Schema::builder()
        .load_str(None, sdl)
        .expect("schema parses")
        .build()
        .expect("schema builds");
    let resolver = ModelTypeResolver::new(&schema);
    let directive_binder = SchemaDirectiveBinder::new(&schema);
    let graph = ObjectGraphBuilder::new(&schema, &resolver, &directive_binder)
        .build()
        .expect("graph builds");
    BoundSchema {
        graph,
        num_schema_files: 1,
        num_source_files: 0,
        num_schema_types: schema.defined_types().len(),
    }
}

#[test]
fn type_count_is_reported_apart_from_bound_objects() {
    let bound = bind_sdl("
        enum Color { RED }
        input Filter { color: Color }
        type Query { todos(filter: Filter): Boolean }
    ");

    let summary = summarize(&bound);
    let lines: Vec<&str> = summary.lines().collect();

    // Five built-in scalars plus Color, Filter and Query.
    assert_eq!(lines[1], "  * Loaded 8 schema types.");
    assert_eq!(lines[2], "  * Bound 1 objects and 1 input objects.");
    assert_eq!(lines[5], "  * Produced 1 argument sets.");
}
