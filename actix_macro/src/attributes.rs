use syn::{Attribute, Lit, Meta, MetaNameValue, NestedMeta};

/// Finds `#[<attribute>(<key> = <literal>)]` among `attrs`.
fn name_value(attrs: &[Attribute], attribute: &str, key: &str) -> syn::Result<Option<Lit>> {
  for attr in attrs.iter().filter(|a| a.path.is_ident(attribute)) {
    let list = match attr.parse_meta()? {
      Meta::List(list) => list,
      other => return Err(syn::Error::new_spanned(other, format!("Expected `#[{}({} = ...)]`.", attribute, key)))
    };

    if let Some(nested) = list.nested.into_iter().next() {
      return match nested {
        NestedMeta::Meta(Meta::NameValue(MetaNameValue { path, lit, .. })) if path.is_ident(key) => Ok(Some(lit)),
        other => Err(syn::Error::new_spanned(other, format!("Nonsense argument. Expected `{} = ...`.", key)))
      };
    }
  }

  Ok(None)
}

/// Published activation name from `#[activation(name = "...")]`, if present.
pub fn published_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
  match name_value(attrs, "activation", "name")? {
    None                 => Ok(None),
    Some(Lit::Str(name)) => Ok(Some(name.value())),
    Some(other)          => Err(syn::Error::new_spanned(other, "Expected a string literal, like `#[activation(name = \"A_ELuC\")]`."))
  }
}

/// Initial value from `#[param(default = ...)]`.
/// - Integer literals are accepted and widened (`default = 2` means `2.0`).
/// - Negative defaults are not expressible as attribute literals.
pub fn default_value(attrs: &[Attribute]) -> syn::Result<Option<f64>> {
  match name_value(attrs, "param", "default")? {
    None                   => Ok(None),
    Some(Lit::Float(lit))  => lit.base10_parse::<f64>().map(Some),
    Some(Lit::Int(lit))    => lit.base10_parse::<f64>().map(Some),
    Some(other)            => Err(syn::Error::new_spanned(other, "Expected a numeric literal, like `#[param(default = 0.5)]`."))
  }
}
