use convert_case::Case;
use convert_case::Casing;
use darling::FromDeriveInput;
use darling::FromField;
use proc_macro2::Ident;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;
use syn::Type;

#[derive(Debug, FromField)]
#[darling(attributes(sorm))]
struct FieldReceiver {
    pub ident: Option<Ident>,
    pub ty:    Type,

    #[darling(default)]
    pub primary_key: bool,

    #[darling(default)]
    pub auto_increment: bool,

    #[darling(default)]
    pub unique: bool,

    #[darling(default)]
    pub column_name: Option<String>,

    #[darling(default)]
    pub default: Option<String>,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(sorm), supports(struct_named))]
struct ModelReceiver {
    pub ident: Ident,
    pub data:  darling::ast::Data<(), FieldReceiver>,

    #[darling(default)]
    pub table_name: Option<String>,

    /// The user writes `impl Hooks` themselves
    #[darling(default)]
    pub hooks: bool,
}

#[derive(Debug)]
struct FieldInfo {
    pub field_name:        Ident,
    pub column_name:       String,
    pub field_type:        Type,
    pub is_primary_key:    bool,
    pub is_optional:       bool,
    pub is_auto_increment: bool,
    pub is_unique:         bool,
    pub default_value:     Option<String>,
}

#[derive(Debug)]
struct ModelInfo {
    pub struct_name: Ident,
    pub table_name:  String,
    pub fields:      Vec<FieldInfo>,
    pub user_hooks:  bool,
}

impl FieldReceiver {
    pub fn into_field_info(self) -> darling::Result<FieldInfo> {
        let Some(field_name) = self.ident else {
            return Err(darling::Error::custom("expected a named field"));
        };
        let column_name = self.column_name.unwrap_or_else(|| field_name.to_string());

        Ok(FieldInfo {
            field_name,
            column_name,
            is_optional: is_option_type(&self.ty),
            field_type: self.ty,
            is_primary_key: self.primary_key,
            is_auto_increment: self.auto_increment,
            is_unique: self.unique,
            default_value: self.default,
        })
    }
}

impl ModelReceiver {
    pub fn into_model_info(self) -> darling::Result<ModelInfo> {
        let table_name = self.table_name.unwrap_or_else(|| self.ident.to_string().to_case(Case::Snake));

        let Some(fields) = self.data.take_struct() else {
            return Err(darling::Error::unsupported_shape("expected a struct with named fields"));
        };
        let fields =
            fields.fields.into_iter().map(FieldReceiver::into_field_info).collect::<darling::Result<Vec<_>>>()?;

        Ok(ModelInfo { struct_name: self.ident, table_name, fields, user_hooks: self.hooks })
    }
}

/// Derives `sorm::Model`, `sorm::FromRow` and (unless `#[sorm(hooks)]`) an empty `sorm::Hooks`
///
/// ```ignore
/// #[derive(Clone, Debug, Model)]
/// #[sorm(table_name = "users")]
/// pub struct User {
///     #[sorm(primary_key, auto_increment)]
///     pub id:   i64,
///     #[sorm(unique)]
///     pub name: String,
///     pub age:  Option<i64>,
/// }
/// ```
#[proc_macro_derive(Model, attributes(sorm))]
pub fn derive_model(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    let model_info = match ModelReceiver::from_derive_input(&input).and_then(ModelReceiver::into_model_info) {
        Ok(info) => info,
        Err(e) => return e.write_errors().into(),
    };

    let expanded = impl_model(&model_info);
    proc_macro::TokenStream::from(expanded)
}

fn impl_model(model_info: &ModelInfo) -> TokenStream2 {
    let name = &model_info.struct_name;
    let table_name = &model_info.table_name;

    let column_defs: Vec<_> = model_info
        .fields
        .iter()
        .map(|f| {
            let field = f.field_name.to_string();
            let column = &f.column_name;
            let column_type = rust_type_to_column_type(&f.field_type, f.is_optional);
            let nullable = f.is_optional;
            let primary_key = f.is_primary_key;
            let auto_increment = f.is_auto_increment;
            let unique = f.is_unique;
            let default = match &f.default_value {
                Some(val) => quote! { Some(#val) },
                None => quote! { None },
            };
            quote! {
                sorm::ColumnDef {
                    field: #field,
                    name: #column,
                    column_type: #column_type,
                    nullable: #nullable,
                    primary_key: #primary_key,
                    auto_increment: #auto_increment,
                    unique: #unique,
                    default: #default,
                }
            }
        })
        .collect();

    let insert_values: Vec<_> = model_info
        .fields
        .iter()
        .filter(|f| !f.is_auto_increment)
        .map(|f| {
            let field_name = &f.field_name;
            quote! { sorm::IntoValue::into_value(self.#field_name.clone()) }
        })
        .collect();

    let from_row_fields: Vec<_> = model_info
        .fields
        .iter()
        .enumerate()
        .map(|(idx, f)| {
            let field_name = &f.field_name;
            if f.is_optional {
                quote! {
                    #field_name: sorm::FromValue::from_value_opt(row.get_value(#idx)?)?
                }
            } else {
                quote! {
                    #field_name: sorm::FromValue::from_value(row.get_value(#idx)?)?
                }
            }
        })
        .collect();

    let hooks_impl = if model_info.user_hooks {
        quote! {}
    } else {
        quote! { impl sorm::Hooks for #name {} }
    };

    quote! {
        impl sorm::Model for #name {
            fn table_name() -> &'static str {
                #table_name
            }

            fn columns() -> &'static [sorm::ColumnDef] {
                const COLUMNS: &[sorm::ColumnDef] = &[#(#column_defs),*];
                COLUMNS
            }

            fn insert_values(&self) -> Vec<sorm::Value> {
                vec![#(#insert_values),*]
            }
        }

        impl sorm::FromRow for #name {
            fn from_row(row: &sorm::Row) -> sorm::Result<Self> {
                Ok(Self {
                    #(#from_row_fields),*
                })
            }
        }

        #hooks_impl
    }
}

fn rust_type_to_column_type(ty: &Type, is_optional: bool) -> TokenStream2 {
    let inner_type = if is_optional { extract_generic_inner_type(ty, "Option").unwrap_or(ty) } else { ty };

    let Type::Path(type_path) = inner_type else {
        return quote! { sorm::ColumnType::Text };
    };
    let Some(segment) = type_path.path.segments.last() else {
        return quote! { sorm::ColumnType::Text };
    };

    match segment.ident.to_string().as_str() {
        "bool" => quote! { sorm::ColumnType::Boolean },
        "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => quote! { sorm::ColumnType::Integer },
        "i64" => quote! { sorm::ColumnType::BigInt },
        "f32" | "f64" => quote! { sorm::ColumnType::Float },
        "NaiveDateTime" | "NaiveDate" | "DateTime" => quote! { sorm::ColumnType::Timestamp },
        "Vec" => match extract_generic_inner_type(inner_type, "Vec") {
            Some(Type::Path(inner)) if inner.path.is_ident("u8") => quote! { sorm::ColumnType::Blob },
            _ => quote! { sorm::ColumnType::Text },
        },
        _ => quote! { sorm::ColumnType::Text },
    }
}

fn extract_generic_inner_type<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) => match args.args.first() {
            Some(syn::GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

fn is_option_type(ty: &Type) -> bool {
    extract_generic_inner_type(ty, "Option").is_some()
}
