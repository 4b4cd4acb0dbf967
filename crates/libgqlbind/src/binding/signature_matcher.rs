use crate::binding::ArgumentBindError;
use crate::binding::ArgumentBinding;
use crate::binding::FieldBinding;
use crate::binding::ImplParameter;

type Result<T> = std::result::Result<T, ArgumentBindError>;

/// How to treat schema arguments that a pre-existing method does not accept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignatureBindingMode {
    /// Silently drop them.
    #[default]
    Lenient,

    /// Fail with [`ArgumentBindError::UnusedSchemaArgument`].
    Strict,
}

/// Re-binds a field's arguments to the parameter list of the method that
/// implements it.
///
/// On success the field's args are replaced with one binding per parameter,
/// in parameter order, each carrying the parameter's type. On failure the
/// field is left exactly as it was.
pub fn bind_to_implementation_signature(
    field: &mut FieldBinding,
    actual_params: &[ImplParameter],
    mode: SignatureBindingMode,
) -> Result<()> {
    bind_arguments_to_parameters(&mut field.args, actual_params, mode)
}

pub(crate) fn bind_arguments_to_parameters(
    args: &mut Vec<ArgumentBinding>,
    actual_params: &[ImplParameter],
    mode: SignatureBindingMode,
) -> Result<()> {
    let matched_indices = match_parameters(args, actual_params, mode)?;

    let mut unclaimed: Vec<Option<ArgumentBinding>> =
        std::mem::take(args).into_iter().map(Some).collect();
    *args = matched_indices.into_iter()
        .zip(actual_params)
        .filter_map(|(arg_idx, param)| {
            unclaimed[arg_idx].take().map(|mut arg| {
                arg.type_ref.override_impl_type(param.impl_type.to_owned());
                arg
            })
        })
        .collect();

    Ok(())
}

/// For each parameter, the index of the argument it binds to. Computed
/// entirely before anything is mutated.
fn match_parameters(
    args: &[ArgumentBinding],
    actual_params: &[ImplParameter],
    mode: SignatureBindingMode,
) -> Result<Vec<usize>> {
    let mut matched_indices: Vec<usize> = Vec::with_capacity(actual_params.len());
    for param in actual_params {
        // A schema-name match anywhere in the list outranks a binding-name
        // match, so `first_name` never claims `firstName` when a
        // `first_name` argument also exists.
        let arg_idx = args.iter()
            .position(|arg| arg.matches_schema_name(param.name()))
            .or_else(|| args.iter().position(|arg| arg.matches_binding_name(param.name())));
        let Some(arg_idx) = arg_idx else {
            return Err(ArgumentBindError::UnboundParameter {
                parameter_name: param.name().to_string(),
            });
        };

        if matched_indices.contains(&arg_idx) {
            return Err(ArgumentBindError::DuplicateParameter {
                parameter_name: param.name().to_string(),
                argument_name: args[arg_idx].name().to_string(),
            });
        }
        matched_indices.push(arg_idx);
    }

    if mode == SignatureBindingMode::Strict
        && let Some(unused_arg) = args.iter()
            .enumerate()
            .find(|(arg_idx, _)| !matched_indices.contains(arg_idx))
            .map(|(_, arg)| arg) {
        return Err(ArgumentBindError::UnusedSchemaArgument {
            argument_name: unused_arg.name().to_string(),
        });
    }

    Ok(matched_indices)
}
