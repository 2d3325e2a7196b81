use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Ident};
use crate::attributes;

/// One learnable scalar field of a named activation struct.
struct Field {
  ident:   Ident,
  index:   Literal,
  default: f64,
}

pub fn core(input: DeriveInput) -> syn::Result<TokenStream> {
  let name      = input.ident.clone();
  let published = attributes::published_name(&input.attrs)?.unwrap_or_else(|| name.to_string());

  let data = match input.data {
    Data::Struct(ref s) => s,
    _ => return Err(syn::Error::new_spanned(&input.ident, "`Parameters` can only be derived for structs."))
  };

  match data.fields {
    Fields::Unit      => Ok(fixed(&name, &published)),
    Fields::Named(ref named) => {
      let scalar = scalar_parameter(&input)?;
      let fields = named.named.iter()
        .enumerate()
        .map(|(index, field)| {
          // named fields always carry an ident
          let ident = field.ident.clone().ok_or_else(|| syn::Error::new_spanned(field, "Expected a named field."))?;
          let default = attributes::default_value(&field.attrs)?
            .ok_or_else(|| syn::Error::new_spanned(field, "Every parameter needs an initial value: `#[param(default = ...)]`."))?;

          Ok(Field { ident, index: Literal::usize_unsuffixed(index), default })
        })
        .collect::<syn::Result<Vec<Field>>>()?;

      Ok(parametric(&name, &published, &scalar, &fields))
    },
    Fields::Unnamed(_) => Err(syn::Error::new_spanned(&input.ident, "Tuple structs are not supported, name each parameter field."))
  }
}

/// The single generic scalar type (`T` in `struct OptimA<T = f64>`).
fn scalar_parameter(input: &DeriveInput) -> syn::Result<Ident> {
  let mut types = input.generics.params.iter().filter_map(|p| match p {
    GenericParam::Type(t) => Some(t.ident.clone()),
    _ => None
  });

  match (types.next(), types.next()) {
    (Some(scalar), None) => Ok(scalar),
    _ => Err(syn::Error::new_spanned(&input.generics, "Parametric activations must be generic over exactly one scalar type, like `struct Unit<T = f64>`."))
  }
}

/// Unit struct: no learnable parameters, lifting is the identity.
fn fixed(name: &Ident, published: &str) -> TokenStream {
  quote! {
    impl<T: ::actix::Real> ::actix::Parameters<T> for #name {
      const NAME:       &'static str          = #published;
      const PARAMETERS: &'static [&'static str] = &[];
      type Lifted = #name;

      fn parameter(&self, _index: usize) -> ::core::option::Option<T> { ::core::option::Option::None }
      fn parameter_mut(&mut self, _index: usize) -> ::core::option::Option<&mut T> { ::core::option::Option::None }
      fn lift(&self, _seed: ::core::option::Option<usize>) -> Self::Lifted { #name }
    }

    impl ::core::default::Default for #name {
      fn default() -> Self { #name }
    }
  }
}

fn parametric(name: &Ident, published: &str, scalar: &Ident, fields: &[Field]) -> TokenStream {
  let idents   = fields.iter().map(|f| &f.ident).collect::<Vec<_>>();
  let indices  = fields.iter().map(|f| &f.index).collect::<Vec<_>>();
  let defaults = fields.iter().map(|f| f.default);
  let names    = idents.iter().map(|i| i.to_string());

  quote! {
    impl<#scalar: ::actix::Real> ::actix::Parameters<#scalar> for #name<#scalar> {
      const NAME:       &'static str          = #published;
      const PARAMETERS: &'static [&'static str] = &[#(#names),*];
      type Lifted = #name<::actix::Dual<#scalar>>;

      fn parameter(&self, index: usize) -> ::core::option::Option<#scalar> {
        match index {
          #(#indices => ::core::option::Option::Some(self.#idents),)*
          _ => ::core::option::Option::None
        }
      }

      fn parameter_mut(&mut self, index: usize) -> ::core::option::Option<&mut #scalar> {
        match index {
          #(#indices => ::core::option::Option::Some(&mut self.#idents),)*
          _ => ::core::option::Option::None
        }
      }

      fn lift(&self, seed: ::core::option::Option<usize>) -> Self::Lifted {
        #name {
          #(#idents: ::actix::Dual::seeded(self.#idents, seed == ::core::option::Option::Some(#indices)),)*
        }
      }
    }

    impl<#scalar: ::actix::Real> ::core::default::Default for #name<#scalar> {
      fn default() -> Self {
        Self { #(#idents: <#scalar as ::actix::Real>::lit(#defaults),)* }
      }
    }
  }
}
