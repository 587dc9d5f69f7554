use quote::{format_ident, quote};

/// Expands to one `#[test]` per `.lox` fixture below `bin/tests`, each calling
/// `lox_expect` with the fixture's contents.
#[proc_macro]
pub fn generate_tests(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let root_dir = format!("{}/..", env!("CARGO_MANIFEST_DIR"));
    let tests = walkdir::WalkDir::new(root_dir.clone())
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("lox".as_ref()))
        .map(|entry| {
            let fixture_path = entry.path().to_string_lossy().to_string();
            let relative_path = entry.path().strip_prefix(&root_dir).unwrap().with_extension("");
            let test_ident = format_ident!(
                "test_{}",
                relative_path.to_string_lossy().replace(['/', '\\', '-', '.'], "_")
            );
            quote! {
                #[test]
                fn #test_ident() {
                    lox_expect(std::fs::read_to_string(#fixture_path).unwrap().as_str());
                }
            }
        });

    quote! {
        #[ctor::ctor]
        fn init() {
            let _ = env_logger::builder().is_test(true).try_init();
        }

        #(#tests)*
    }
    .into()
}
