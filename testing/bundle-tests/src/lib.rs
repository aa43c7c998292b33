//! End-to-end coverage for assembled state bundles lives in `tests/`.
