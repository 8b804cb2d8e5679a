//! Rendering of accessor types and the generation driver.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use proc_macro2::TokenStream;
use quote::quote;

use crate::resx::{ResourceEntry, parse_resource_document};
use crate::scanner::{self, Access, FileFilter, GenerationRequest};

/// Fixed banner prepended to every generated file.
const BANNER: &[&str] = &[
    " Auto-generated resource accessors. Do not edit.",
    "",
    " Edit the module's resource document and rerun the generator instead;",
    " manual changes are lost when this file is regenerated.",
];

/// Produces the full text of the accessor source for one resource file.
///
/// Reads and parses the document at `request.file_path`; any read or parse
/// failure aborts the request with no partial output.
pub fn generate(request: &GenerationRequest) -> Result<String> {
    let xml = fs::read_to_string(&request.file_path)
        .with_context(|| format!("failed to read {}", request.file_path.display()))?;
    let entries = parse_resource_document(&xml)
        .with_context(|| format!("failed to parse {}", request.file_path.display()))?;
    render(request, &entries)
}

/// Splits a possibly dotted class name into its namespace and short name.
pub(crate) fn split_class_name(class_name: &str) -> (Option<&str>, &str) {
    match class_name.rsplit_once('.') {
        Some((namespace, short)) => (Some(namespace), short),
        None => (None, class_name),
    }
}

/// The identifier the packaging step uses when embedding the compiled
/// resource set. Generated managers must be constructed with exactly this
/// string or every lookup misses.
pub(crate) fn resource_set_identifier(request: &GenerationRequest) -> String {
    format!(
        "{}.resources.{}{}",
        request.module_name,
        request.access.identifier_infix(),
        request.class_name
    )
}

/// Renders the accessor type for already-parsed entries.
fn render(request: &GenerationRequest, entries: &[ResourceEntry]) -> Result<String> {
    let (namespace, short_class_name) = split_class_name(&request.class_name);
    let vis: TokenStream = match request.access {
        Access::Public => quote!(pub),
        Access::Internal => quote!(pub(crate)),
    };
    let class_ident = parse_ident(short_class_name)
        .with_context(|| format!("class name `{short_class_name}` is not usable as an identifier"))?;
    let base_name = resource_set_identifier(request);

    let getters = entries
        .iter()
        .map(|entry| entry_tokens(entry, &vis))
        .collect::<Result<Vec<_>>>()?;

    let mut items = quote! {
        /// A strongly-typed resource type for looking up localized strings.
        #vis struct #class_ident(());

        static RESOURCE_MAN: ::std::sync::OnceLock<::restype::ResourceManager> =
            ::std::sync::OnceLock::new();
        static RESOURCE_CULTURE: ::std::sync::RwLock<Option<::restype::Culture>> =
            ::std::sync::RwLock::new(None);

        impl #class_ident {
            /// Returns the cached resource manager used by this type.
            #vis fn resource_manager() -> &'static ::restype::ResourceManager {
                RESOURCE_MAN.get_or_init(|| ::restype::ResourceManager::new(#base_name))
            }

            /// Culture override applied to every lookup through this type.
            #vis fn culture() -> Option<::restype::Culture> {
                RESOURCE_CULTURE.read().unwrap().clone()
            }

            /// Replaces the culture override applied to lookups through this type.
            #vis fn set_culture(culture: Option<::restype::Culture>) {
                *RESOURCE_CULTURE.write().unwrap() = culture;
            }

            #(#getters)*
        }
    };

    // Innermost segment first: A.B wraps as `mod A { mod B { ... } }`.
    if let Some(namespace) = namespace {
        for segment in namespace.rsplit('.') {
            let mod_ident = parse_ident(segment)
                .with_context(|| format!("namespace segment `{segment}` is not usable as an identifier"))?;
            items = quote! {
                #vis mod #mod_ident {
                    #items
                }
            };
        }
    }

    let banner = BANNER;
    let file_tokens = quote! {
        #(#![doc = #banner])*
        #![allow(non_snake_case)]

        #items
    };

    let file: syn::File = syn::parse2(file_tokens).context("generated code failed to parse")?;
    Ok(normalize_newlines(&prettyplease::unparse(&file)))
}

/// One doc-commented getter per entry. The entry name (whitespace already
/// substituted by the parser) is both the function name and the lookup key.
fn entry_tokens(entry: &ResourceEntry, vis: &TokenStream) -> Result<TokenStream> {
    let ident = parse_ident(&entry.name)
        .with_context(|| format!("resource entry `{}` is not usable as an identifier", entry.name))?;
    let name = entry.name.as_str();
    let docs = entry_doc_lines(&entry.value);
    Ok(quote! {
        #(#[doc = #docs])*
        #vis fn #ident() -> Option<String> {
            Self::resource_manager().get_string(#name, Self::culture().as_ref())
        }
    })
}

/// Doc lines for one entry: the lookup phrase plus the value's remaining
/// lines, one doc attribute per line so multi-line values stay inside the
/// comment block.
fn entry_doc_lines(value: &str) -> Vec<String> {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or("");
    let mut docs = vec![format!(" Looks up a localized string similar to {first}")];
    docs.extend(lines.map(|line| format!(" {line}")));
    docs
}

fn parse_ident(text: &str) -> Result<proc_macro2::Ident> {
    syn::parse_str::<syn::Ident>(text).map_err(|_| anyhow!("`{text}` is not a valid identifier"))
}

/// Collapses `\r\n` and bare `\r` to `\n`. The rendered text itself never
/// contains `\r`, but the final pass keeps the output canonical regardless
/// of what entry values carried.
fn normalize_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

/// Scans module directories and writes one generated source per resource
/// document.
pub struct ResourceGenerator {
    module_dirs: Vec<PathBuf>,
    filter: FileFilter,
}

impl ResourceGenerator {
    /// Single-file mode: `path` points at one resource document inside a
    /// module's `resources` directory; the module directory is its
    /// grandparent.
    pub fn for_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(anyhow!("resource file {} not found", path.display()));
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_os_string())
            .ok_or_else(|| anyhow!("{} is not a resource file path", path.display()))?;
        let module_dir = scanner::module_dir_of(&path)?;
        Ok(Self {
            module_dirs: vec![module_dir],
            filter: FileFilter::Name(file_name),
        })
    }

    /// Scan mode: every subdirectory of `parent` is a candidate module.
    pub fn for_siblings(parent: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            module_dirs: scanner::candidate_modules(parent.as_ref())?,
            filter: FileFilter::Extension,
        })
    }

    /// Runs generation over every module, returning the processed output
    /// paths.
    ///
    /// Modules without a `resources` subdirectory are skipped. Output goes to
    /// `<module>/gen/<ShortClassName>.rs`; the `gen` directory is created on
    /// demand, and a file whose content is already up to date is left
    /// untouched.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let mut outputs = Vec::new();
        for module_dir in &self.module_dirs {
            let resources_dir = module_dir.join(scanner::RESOURCES_DIR);
            if !resources_dir.is_dir() {
                continue;
            }
            let gen_dir = module_dir.join(scanner::GEN_DIR);
            fs::create_dir_all(&gen_dir).with_context(|| format!("failed to create {}", gen_dir.display()))?;

            for file_path in scanner::resource_files(&resources_dir, &self.filter)? {
                let request = scanner::request_for(module_dir, file_path)?;
                let source = generate(&request)?;

                let (_, short_class_name) = split_class_name(&request.class_name);
                let out_path = gen_dir.join(format!("{short_class_name}.rs"));
                let up_to_date = fs::read_to_string(&out_path).is_ok_and(|existing| existing == source);
                if !up_to_date {
                    fs::write(&out_path, &source).with_context(|| format!("failed to write {}", out_path.display()))?;
                }
                outputs.push(out_path);
            }
        }
        Ok(outputs)
    }
}
