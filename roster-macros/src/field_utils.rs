use syn::{Field, FieldsNamed, Token, Type, punctuated::Punctuated};

/// 确保具名字段结构体包含所需字段，并把它们按给定顺序移至最前
/// - 已存在的字段复用原定义（保留其属性与可见性）
/// - 缺失的字段以 `pub` 可见性新增
/// - 其余字段保持原有相对顺序
pub(crate) fn ensure_leading_fields(fields_named: &mut FieldsNamed, required: &[(&str, &Type)]) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    for (name, ty) in required.iter() {
        if let Some(existing) = old_named
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|i| i == *name))
        {
            new_named.push(existing.clone());
        } else {
            let ident = quote::format_ident!("{}", name);
            let field: Field = syn::parse_quote! { pub #ident: #ty };
            new_named.push(field);
        }
    }

    for f in old_named.into_iter() {
        let is_required = f
            .ident
            .as_ref()
            .is_some_and(|i| required.iter().any(|(n, _)| i == n));
        if !is_required {
            new_named.push(f);
        }
    }

    fields_named.named = new_named;
}
