use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 4] =
    ["mod.rs", "event.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_layout_then_every_widget_has_core_files() {
    let widgets_dir = widgets_dir();
    let mut violations: Vec<String> = Vec::new();

    let declared =
        declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let on_disk = sub_directories(&widgets_dir);

    if declared != on_disk {
        violations.push(format!(
            "{}: declared widgets {:?} do not match directories {:?}",
            widgets_dir.display(),
            declared,
            on_disk
        ));
    }

    for widget in &on_disk {
        let widget_dir = widgets_dir.join(widget);
        for required in REQUIRED_WIDGET_FILES {
            if !widget_dir.join(required).is_file() {
                violations.push(format!(
                    "{}: missing {required}",
                    widget_dir.display()
                ));
            }
        }

        let source = read_source(&widget_dir.join("mod.rs"));
        for forbidden in ["crate::app", "crate::routers"] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: widgets must not depend on {forbidden}",
                    widget_dir.display()
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "widget layout violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_widget_views_when_validating_conventions_then_all_views_comply() {
    let widgets_dir = widgets_dir();
    let mut violations: Vec<String> = Vec::new();

    for widget in sub_directories(&widgets_dir) {
        let view_dir = widgets_dir.join(widget).join("view");
        if !view_dir.is_dir() {
            continue;
        }

        let declared =
            declared_modules(&view_dir.join("mod.rs"), &mut violations);
        let on_disk = rust_file_stems(&view_dir);
        if declared != on_disk {
            violations.push(format!(
                "{}: declared views {:?} do not match files {:?}",
                view_dir.display(),
                declared,
                on_disk
            ));
        }

        for module in &declared {
            let file_path = view_dir.join(format!("{module}.rs"));
            validate_view_file(&file_path, &mut violations);
        }
    }

    assert!(
        violations.is_empty(),
        "view convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read_source(file_path);
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });
    let expected_props = format!("{}Props", file_stem_pascal_case(file_path));

    if source.contains("crate::app") {
        violations.push(format!(
            "{}: direct coupling to the app event is forbidden",
            file_path.display()
        ));
    }

    for forbidden in ["log::", "std::fs", "Task::", "iced::Task"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) => {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}: wildcard use/import is forbidden",
                        file_path.display()
                    ));
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names != [expected_props.clone()] {
        violations.push(format!(
            "{}: expected a single '{expected_props}' type, found {:?}",
            file_path.display(),
            props_names
        ));
    }
}

fn widgets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/widgets")
}

fn read_source(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let source = read_source(mod_rs);
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", mod_rs.display())
    });

    let mut declared = BTreeSet::new();
    for item in &file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    declared
}

fn sub_directories(dir: &Path) -> BTreeSet<String> {
    dir_entries(dir)
        .filter(|path| path.is_dir())
        .filter_map(|path| file_name(&path))
        .collect()
}

fn rust_file_stems(dir: &Path) -> BTreeSet<String> {
    dir_entries(dir)
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .filter(|path| file_name(path).as_deref() != Some("mod.rs"))
        .filter_map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        })
        .collect()
}

fn dir_entries(dir: &Path) -> impl Iterator<Item = PathBuf> {
    fs::read_dir(dir)
        .unwrap_or_else(|err| {
            panic!("failed to read dir {}: {err}", dir.display())
        })
        .map(|entry| match entry {
            Ok(entry) => entry.path(),
            Err(err) => panic!("failed to read dir entry: {err}"),
        })
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
