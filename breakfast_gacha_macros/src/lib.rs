use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitInt, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[weight(<positive integer>)]
#[proc_macro_derive(TierWeights, attributes(weight))]
pub fn derive_tier_weights(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(
            input.ident.span(),
            "TierWeights can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    // Collect Self::Variant paths and (variant, weight) entries, both in
    // declaration order. Declaration order is the cumulative-bucket order.
    let mut variants = Vec::new();
    let mut entries = Vec::new();

    for variant in &data_enum.variants {
        // Only fieldless enums are supported (tier enums are C-like)
        match &variant.fields {
            Fields::Unit => {}
            _ => {
                return syn::Error::new(
                    variant.span(),
                    "TierWeights only supports fieldless variants",
                )
                .to_compile_error()
                .into();
            }
        }

        // Find #[weight(...)]
        let mut weight_lit: Option<LitInt> = None;
        for Attribute { meta, .. } in &variant.attrs {
            if meta.path().is_ident("weight") {
                match meta {
                    syn::Meta::List(list) => {
                        // Parse inside as a bare integer literal (e.g. 50)
                        match syn::parse2::<LitInt>(list.tokens.clone()) {
                            Ok(lit) => weight_lit = Some(lit),
                            Err(e) => {
                                return syn::Error::new(
                                    list.span(),
                                    format!("use #[weight(<positive integer>)]: {e}"),
                                )
                                .to_compile_error()
                                .into();
                            }
                        }
                    }
                    _ => {
                        return syn::Error::new(meta.span(), "use #[weight(<positive integer>)]")
                            .to_compile_error()
                            .into();
                    }
                }
            }
        }
        let Some(lit) = weight_lit else {
            return syn::Error::new(variant.span(), "missing #[weight(...)] on variant")
                .to_compile_error()
                .into();
        };

        // A zero weight is rejected here so a dead tier never compiles; the
        // sum-to-100 invariant is checked when the table is built.
        match lit.base10_parse::<u32>() {
            Ok(0) => {
                return syn::Error::new(lit.span(), "weight must be a positive integer")
                    .to_compile_error()
                    .into();
            }
            Ok(_) => {}
            Err(e) => {
                return syn::Error::new(lit.span(), format!("invalid weight: {e}"))
                    .to_compile_error()
                    .into();
            }
        }

        let ident = &variant.ident;
        variants.push(quote! { Self::#ident });
        entries.push(quote! { (Self::#ident, #lit) });
    }

    // Generate const VARIANTS/ENTRIES and a table() inherent as sugar.
    let expanded = quote! {
        impl breakfast_gacha::TierWeights for #enum_ident {
            const VARIANTS: &'static [Self] = &[
                #(#variants),*
            ];
            const ENTRIES: &'static [(Self, u32)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Build a weighted tier table from the annotated percentages.
            pub fn table() -> ::core::result::Result<
                breakfast_gacha::DrawTable<breakfast_gacha::CumulativeSampler, Self>,
                breakfast_gacha::WeightError,
            >
            where
                Self: ::core::marker::Copy,
            {
                <Self as breakfast_gacha::TierWeights>::table()
            }
        }
    };

    expanded.into()
}
