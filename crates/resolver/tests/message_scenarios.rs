use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ttd_dataset::{Definition, ReferenceDataset, Symbol};
use ttd_resolver::{process_message, resolve, EmbedField, Resolution, ERROR_TITLE};

fn dataset() -> ReferenceDataset {
    ReferenceDataset::from_json_str(
        r#"{
            "symbols": [
                {"symbol": "Dbg", "type": "Function", "file": "C:/Kernel/Debug.HC", "line": 42},
                {"symbol": "U8", "type": "Class"}
            ],
            "paths": [
                "/Home/Readme.TXT",
                "/archive/data.bin.Z",
                "/Kernel",
                "/"
            ]
        }"#,
    )
    .expect("dataset")
}

fn fields(text: &str) -> Vec<EmbedField> {
    process_message(text, &dataset())
        .expect("expected a reply")
        .into_fields()
}

fn pair(field: &EmbedField) -> (&str, &str) {
    (field.name.as_str(), field.value.as_str())
}

#[test]
fn symbol_reference_links_to_definition() {
    let fields = fields("%% Dbg");
    assert_eq!(fields.len(), 1);
    assert_eq!(
        pair(&fields[0]),
        (
            "Dbg",
            "Type: Function\nDefinition: [C:/Kernel/Debug.HC, line 42](https://templeos.holyc.xyz/Wb/Kernel/Debug.html#l42)"
        )
    );
}

#[test]
fn path_reference_links_to_page() {
    let fields = fields("%% /Home/Readme.TXT");
    assert_eq!(
        pair(&fields[0]),
        (
            "Readme.TXT",
            "Type: Text\nPath: [::/Home/Readme.TXT](https://templeos.holyc.xyz/Wb/Home/Readme.html)"
        )
    );
}

#[test]
fn unknown_symbol_is_an_error_field() {
    let fields = fields("%% NoSuchThing");
    assert_eq!(
        pair(&fields[0]),
        (ERROR_TITLE, "Symbol not found: NoSuchThing")
    );
}

#[test]
fn mixed_misses_keep_source_order() {
    let fields = fields("%% foo %% /bad");
    let pairs: Vec<_> = fields.iter().map(pair).collect();
    assert_eq!(
        pairs,
        vec![
            (ERROR_TITLE, "Symbol not found: foo"),
            (ERROR_TITLE, "Path not found: ::/bad"),
        ]
    );
}

#[test]
fn compressed_path_type_is_marked() {
    let fields = fields("%% /archive/data.bin.Z");
    assert_eq!(fields[0].name, "data.bin.Z");
    let type_line = fields[0].value.lines().next().unwrap();
    assert!(type_line.ends_with(" (Compressed)"), "{type_line}");
}

#[test]
fn hits_and_misses_interleave() {
    let fields = fields("see %% u8 and %%C:/Kernel/ and %% Kernel/x and %% dbg");
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["U8", "Kernel", ERROR_TITLE, "Dbg"]);
    assert_eq!(fields[2].value, "Invalid path: Kernel/x");
}

#[test]
fn root_path_is_titled_slash() {
    let fields = fields("%% /");
    assert_eq!(fields[0].name, "/");
}

#[test]
fn duplicates_produce_duplicate_fields() {
    let fields = fields("%% U8 %% u8");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0], fields[1]);
}

#[test]
fn no_reference_means_no_reply() {
    let data = dataset();
    assert!(process_message("", &data).is_none());
    assert!(process_message("just talking about Dbg", &data).is_none());
    assert!(process_message("100%% sure", &data).is_none());
}

#[test]
fn drive_prefixed_directory_normalizes() {
    let data = dataset();
    assert_eq!(
        resolve("C:/Kernel/", &data),
        Resolution::PathFound("/Kernel")
    );
}

fn flip_case(name: &str, flips: &[bool]) -> String {
    name.chars()
        .zip(flips.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn proptest_symbol_lookup_ignores_case(
        name in "[A-Za-z][A-Za-z0-9_]{0,15}",
        flips in proptest::collection::vec(any::<bool>(), 1..16),
    ) {
        let symbol = Symbol::new(
            name.clone(),
            "Function",
            Some(Definition { file: "C:/Kernel/KMain.HC".into(), line: 1 }),
        );
        let data = ReferenceDataset::from_records(vec![symbol.clone()], Vec::<String>::new());
        let token = flip_case(&name, &flips);
        prop_assert_eq!(resolve(&token, &data), Resolution::SymbolFound(&symbol));
    }

    #[test]
    fn proptest_stored_path_resolves_to_itself(
        path in "(/[A-Za-z][A-Za-z0-9]{0,7}){1,4}(\\.[A-Z]{1,3}){0,2}",
    ) {
        let data = ReferenceDataset::from_records(Vec::<Symbol>::new(), vec![path.clone()]);
        prop_assert_eq!(resolve(&path, &data), Resolution::PathFound(path.as_str()));

        let with_drive = format!("C:{path}/");
        prop_assert_eq!(resolve(&with_drive, &data), Resolution::PathFound(path.as_str()));
    }

    #[test]
    fn proptest_resolution_is_idempotent(token in "[A-Za-z0-9_:/.]{1,24}") {
        let data = dataset();
        prop_assert_eq!(resolve(&token, &data), resolve(&token, &data));
    }

    #[test]
    fn proptest_text_without_marker_yields_nothing(text in "[^%]{0,64}") {
        prop_assert!(process_message(&text, &dataset()).is_none());
    }
}
