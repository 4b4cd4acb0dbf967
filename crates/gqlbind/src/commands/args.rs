use crate::commands::binding_inputs::BindingInputs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgqlbind::binding::ArgumentBinding;

#[derive(Debug, clap::Args)]
pub(crate) struct ArgsCmd {
    #[command(flatten)]
    inputs: BindingInputs,
}

#[inherent::inherent]
impl RunnableCommand for ArgsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let bound = match self.inputs.bind() {
            Ok(bound) => bound,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to bind the schema: {e:#}",
                output_utils::RED_X,
            )),
        };

        let lines = bound.graph.argument_sets().into_iter()
            .map(|(accessor_key, args)| format!(
                "{accessor_key}({})",
                args.iter().map(format_arg).collect::<Vec<_>>().join(", "),
            ))
            .collect::<Vec<_>>();
        if lines.is_empty() {
            return CommandResult::stdout(format_args!("No fields or directives take arguments."));
        }
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}

fn format_arg(arg: &ArgumentBinding) -> String {
    let mut formatted = format!("{}: {}", arg.binding_name(), arg.type_ref().impl_type());
    if let Some(default_value) = arg.default_value() {
        formatted.push_str(format!(" = {default_value}").as_str());
    }
    formatted
}
