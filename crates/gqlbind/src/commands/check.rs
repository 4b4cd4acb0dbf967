use crate::commands::binding_inputs::BindingInputs;
use crate::commands::binding_inputs::BoundSchema;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[command(flatten)]
    inputs: BindingInputs,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let bound = match self.inputs.bind() {
            Ok(bound) => bound,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors binding schema: {e:#}",
                output_utils::RED_X,
            )),
        };

        CommandResult::stdout(format_args!(
            "{} All arguments bound successfully:\n{}",
            output_utils::GREEN_CHECK,
            summarize(&bound),
        ))
    }
}

/// One bullet per line. The schema type count includes built-in scalars,
/// enums, interfaces and unions, none of which are bound.
pub(super) fn summarize(bound: &BoundSchema) -> String {
    let graph = &bound.graph;
    let fields = graph.objects().iter().flat_map(|object| object.fields());
    let num_fields = fields.clone().count();
    let num_bound_methods = fields.filter(|field| field.bound_method().is_some()).count();

    format!(
        concat!(
            "  * Loaded {} schema files and {} Rust source files.\n",
            "  * Loaded {} schema types.\n",
            "  * Bound {} objects and {} input objects.\n",
            "  * Bound {} fields ({} to existing methods).\n",
            "  * Bound {} custom directive definitions.\n",
            "  * Produced {} argument sets.",
        ),
        bound.num_schema_files,
        bound.num_source_files,
        bound.num_schema_types,
        graph.objects().len(),
        graph.inputs().len(),
        num_fields,
        num_bound_methods,
        graph.directives().len(),
        graph.argument_sets().len(),
    )
}
