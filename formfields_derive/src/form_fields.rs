use ::proc_macro::TokenStream;
use ::quote::quote;
use ::syn::{
    parse, punctuated::Punctuated, token::Comma, DeriveInput, Ident, LitStr,
    Visibility,
};
use ::formfields_derive_utils::*;

pub fn form_fields_impl(input: TokenStream) -> TokenStream {
    let struct_tokens: DeriveInput = parse(input).unwrap();
    let named_fields = named_fields(&struct_tokens)
        .expect("expected struct with named fields");
    let struct_id = &struct_tokens.ident;
    let (impl_generics, ty_generics, where_clause) =
        struct_tokens.generics.split_for_impl();
    let mut field_id: Vec<Ident> = Vec::new();
    let mut field_name: Vec<LitStr> = Vec::new();
    let mut field_tag: Vec<LitStr> = Vec::new();
    for field in Field::collect(&named_fields) {
        if field.private || is_excluded_tag(&field.tag.value()) {
            continue;
        }
        field_name.push(id_to_litstr(&field.id));
        field_id.push(field.id);
        field_tag.push(field.tag);
    }
    TokenStream::from(quote! {
        impl #impl_generics ::formfields::FormFields
            for #struct_id #ty_generics #where_clause
        {
            fn walk(&self, walker: &mut ::formfields::Walker) {
            #(
                walker.field(#field_name, #field_tag, &self.#field_id);
            )*
            }
        }
        impl #impl_generics ::formfields::FieldValue
            for #struct_id #ty_generics #where_clause
        {
            fn walk_field(
                &self,
                meta: &::formfields::FieldMeta,
                walker: &mut ::formfields::Walker,
            ) {
                walker.record(meta, self);
            }
        }
    })
}

#[derive(Debug)]
struct Field {
    id: Ident,
    private: bool,
    tag: LitStr,
}

impl Field {
    fn collect(fields: &Punctuated<syn::Field, Comma>) -> Vec<Self> {
        let mut result: Vec<Self> = Vec::new();
        for field in fields {
            let id = field
                .ident
                .as_ref()
                .expect("expected field identifier")
                .clone();
            let tag = get_string_from_attr(&field.attrs, TAG_ATTR, &id, |_| {
                String::new()
            });
            result.push(Self {
                private: matches!(field.vis, Visibility::Inherited),
                tag: LitStr::new(&tag, id.span()),
                id,
            });
        }
        result
    }
}
