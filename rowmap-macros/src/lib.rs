use darling::FromDeriveInput;
use darling::FromField;
use proc_macro2::Ident;
use proc_macro2::TokenStream as TokenStream2;
use quote::format_ident;
use quote::quote;
use syn::DeriveInput;
use syn::Type;

#[derive(Debug, FromField)]
#[darling(attributes(rowmap))]
struct FieldReceiver {
    pub ident: Option<Ident>,
    pub ty:    Type,

    #[darling(default)]
    pub key: bool,

    #[darling(default)]
    pub skip: bool,

    /// Field name as seen by the mapper; the column name is derived from it
    #[darling(default)]
    pub name: Option<String>,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(rowmap), supports(struct_named))]
struct MappedReceiver {
    pub ident: Ident,
    pub data:  darling::ast::Data<(), FieldReceiver>,

    /// Table-name marker. Without it the mapper refuses the type.
    #[darling(default)]
    pub table_name: Option<String>,

    /// Go through `get_<field>` / `set_<field>` methods instead of the fields
    #[darling(default)]
    pub accessors: bool,
}

#[derive(Debug)]
struct FieldInfo {
    pub field_name:  Ident,
    pub mapped_name: String,
    pub field_type:  Type,
    pub is_key:      bool,
}

#[derive(Debug)]
struct MappedInfo {
    pub struct_name: Ident,
    pub table_name:  Option<String>,
    pub accessors:   bool,
    pub fields:      Vec<FieldInfo>,
}

impl FieldReceiver {
    pub fn to_field_info(self) -> darling::Result<FieldInfo> {
        let field_name = self.ident.ok_or_else(|| darling::Error::custom("Expected named field"))?;
        let mapped_name = self.name.unwrap_or_else(|| field_name.to_string());

        Ok(FieldInfo { field_name, mapped_name, field_type: self.ty, is_key: self.key })
    }
}

impl MappedReceiver {
    pub fn to_mapped_info(self) -> darling::Result<MappedInfo> {
        let fields = self
            .data
            .take_struct()
            .ok_or_else(|| darling::Error::custom("Expected struct"))?
            .fields
            .into_iter()
            .filter(|f| !f.skip)
            .map(|f| f.to_field_info())
            .collect::<darling::Result<Vec<_>>>()?;

        Ok(MappedInfo { struct_name: self.ident, table_name: self.table_name, accessors: self.accessors, fields })
    }
}

/// Derive `rowmap::Mapped` for a struct with named fields.
///
/// ```ignore
/// #[derive(Default, Mapped)]
/// #[rowmap(table_name = "sample")]
/// pub struct Sample {
///     #[rowmap(key)]
///     pub id: i32,
///     pub name: String,
///     #[rowmap(name = "lastName")]
///     pub last_name: String,
///     #[rowmap(skip)]
///     pub cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Mapped, attributes(rowmap))]
pub fn derive_mapped(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    let info = match MappedReceiver::from_derive_input(&input).and_then(MappedReceiver::to_mapped_info) {
        Ok(info) => info,
        Err(e) => return e.write_errors().into(),
    };

    let expanded = impl_mapped(&info);
    proc_macro::TokenStream::from(expanded)
}

fn impl_mapped(info: &MappedInfo) -> TokenStream2 {
    let name = &info.struct_name;

    let table_marker = match &info.table_name {
        Some(table_name) => quote! { .table_name(#table_name) },
        None => quote! {},
    };

    let fields: Vec<_> = info.fields.iter().map(|f| field_def(f, info.accessors)).collect();

    quote! {
        impl rowmap::Mapped for #name {
            fn mapped_class() -> rowmap::MappedClass<Self> {
                rowmap::MappedClass::new()
                    #table_marker
                    .constructor(<Self as ::core::default::Default>::default)
                    #(.field(#fields))*
            }
        }
    }
}

fn field_def(field: &FieldInfo, accessors: bool) -> TokenStream2 {
    let field_name = &field.field_name;
    let mapped_name = &field.mapped_name;
    let field_type = &field.field_type;

    let key = if field.is_key { quote! { .key() } } else { quote! {} };

    let (getter, setter) = if accessors {
        let get_fn = format_ident!("get_{}", field_name);
        let set_fn = format_ident!("set_{}", field_name);
        (quote! { |object: &Self| object.#get_fn() }, quote! { |object: &mut Self, value: #field_type| object.#set_fn(value) })
    } else {
        (
            quote! { |object: &Self| ::core::clone::Clone::clone(&object.#field_name) },
            quote! { |object: &mut Self, value: #field_type| object.#field_name = value },
        )
    };

    quote! {
        rowmap::FieldDef::new::<#field_type>(#mapped_name)
            #key
            .getter(#getter)
            .setter(#setter)
    }
}
