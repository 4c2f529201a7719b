//! Built-in example table for the patient-check API.
//!
//! Order matters: the registry stops at the first token contained in the
//! request path.

pub const BUILTIN_EXAMPLES: &[(&str, &str)] = &[
    ("patient-check/50000000001", "example_50000000001"),
    ("patient-check/50000000002", "example_50000000002"),
    ("patient-check/50000000003", "example_50000000003"),
    ("patient-check/50000000004", "example_50000000004"),
    ("patient-check/50000000005", "example_50000000005"),
    ("patient-check/50000000006", "example_50000000006"),
    ("patient-check/50000000007", "example_50000000007"),
    ("patient-check/50000000008", "example_50000000008"),
    ("patient-check/50000000009", "example_50000000009"),
    ("patient-check/50000000010", "example_50000000010"),
    ("patient-check/50000000011", "example_50000000011"),
    ("patient-check/50000000012", "example_50000000012"),
    ("patient-check/50000000013", "example_50000000013"),
    ("patient-check/50000000014", "example_50000000014"),
    ("patient-check/9686368973", "example_5000000001"),
    ("patient-check/9686368906", "example_5000000002"),
    ("patient-check/9658218873", "example_5000000003"),
    ("patient-check/9658218881", "example_5000000004"),
    ("patient-check/9658218903", "example_5000000005"),
    ("patient-check/9658218989", "example_5000000006"),
    ("patient-check/9658218997", "example_5000000007"),
    ("patient-check/9658219004", "example_5000000008"),
    ("patient-check/9658219012", "example_5000000009"),
    ("patient-check/9658220142", "example_5000000010"),
    ("patient-check/9658220150", "example_5000000011"),
    ("patient-check/9450114080", "example_5000000012"),
    ("patient-check/9466447939", "example_5000000013"),
    ("patient-check/9657933617", "example_5000000014"),
    ("patient-check/90000000400", "code400"),
    ("patient-check/90000000404", "code404"),
    ("patient-check/90000000422", "code422"),
    ("patient-check/90000000500", "code500"),
];
