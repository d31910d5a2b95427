//! Reverse route expansion: a template plus ordered parameter values
//! yields a concrete path.

use core::fmt;

use thiserror::Error;

use crate::link::LinkBuilder;

/// Failure to expand a route template into a concrete href.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The number of supplied values does not match the template's
    /// placeholder count.
    #[error("template {template:?} expects {expected} path parameter(s), got {got}")]
    ParameterMismatch {
        template: &'static str,
        expected: usize,
        got: usize,
    },

    /// A `{` without a matching `}` in the template.
    #[error("unclosed placeholder in template {template:?}")]
    UnclosedPlaceholder { template: &'static str },
}

/// Substitutes `{placeholder}` occurrences with `params` in declaration
/// order and returns a builder over the expanded path.
///
/// Placeholder names are documentation only; binding is positional.
pub fn expand(
    template: &'static str,
    params: &[&dyn fmt::Display],
) -> Result<LinkBuilder, ExpandError> {
    let expected = template.matches('{').count();
    if expected != params.len() {
        return Err(ExpandError::ParameterMismatch {
            template,
            expected,
            got: params.len(),
        });
    }

    let mut href = String::with_capacity(template.len());
    let mut rest = template;
    let mut params = params.iter();

    while let Some(open) = rest.find('{') {
        href.push_str(&rest[..open]);
        let close = rest[open..]
            .find('}')
            .ok_or(ExpandError::UnclosedPlaceholder { template })?;
        if let Some(value) = params.next() {
            href.push_str(&value.to_string());
        }
        rest = &rest[open + close + 1..];
    }
    href.push_str(rest);

    Ok(LinkBuilder::new(href))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn substitutes_in_declaration_order() {
        let builder = expand("/customers/{customer}/orders/{order}", &[&1u64, &2u64]).unwrap();
        assert_eq!(builder.href(), "/customers/1/orders/2");
    }

    #[test]
    fn parameterless_templates_pass_through() {
        let builder = expand("/customers", &[]).unwrap();
        assert_eq!(builder.href(), "/customers");
    }

    #[test]
    fn rejects_too_few_params() {
        let err = expand("/customers/{id}", &[]).unwrap_err();
        assert_eq!(
            err,
            ExpandError::ParameterMismatch {
                template: "/customers/{id}",
                expected: 1,
                got: 0,
            }
        );
    }

    #[test]
    fn rejects_too_many_params() {
        let err = expand("/customers", &[&1u64]).unwrap_err();
        assert_eq!(
            err,
            ExpandError::ParameterMismatch {
                template: "/customers",
                expected: 0,
                got: 1,
            }
        );
    }

    #[test]
    fn rejects_unclosed_placeholder() {
        let err = expand("/customers/{id", &[&1u64]).unwrap_err();
        assert_eq!(
            err,
            ExpandError::UnclosedPlaceholder {
                template: "/customers/{id",
            }
        );
    }

    proptest! {
        #[test]
        fn expanded_hrefs_never_keep_placeholders(customer in 0u64..100_000, order in 0u64..100_000) {
            let builder = expand("/customers/{customer}/orders/{order}", &[&customer, &order]).unwrap();
            prop_assert!(!builder.href().contains('{'), "href still contains an opening brace");
            prop_assert!(!builder.href().contains('}'), "href still contains a closing brace");
            prop_assert_eq!(builder.href(), format!("/customers/{customer}/orders/{order}"));
        }
    }
}
