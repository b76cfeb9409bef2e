use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Models must use named fields, the names are sent over the wire.")
        }
        .into();
    }

    if !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input.fields.iter().map(|f| f.ty.clone()).collect::<Vec<_>>();
    let field_strs = field_names.iter().map(|f| f.to_string()).collect::<Vec<_>>();

    // Every component is addressable by name, so all of them are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model.
            pub const fn new(#(#field_names: #field_types),*) -> Self {
                Self {
                    #(#field_names,)*
                }
            }
        }

        impl crate::models::Fields for #struct_name {
            const FIELDS: &'static [&'static str] = &[#(#field_strs),*];

            fn field(&self, name: &str) -> Option<String> {
                match name {
                    #(#field_strs => Some(self.#field_names.to_string()),)*
                    _ => None,
                }
            }

            fn from_values(
                values: &crate::models::FieldValues,
            ) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_names: crate::models::parse_field(values, #field_strs)?,)*
                })
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
