fn main() {
    cargo_run_wasm::run_wasm_with_css(
        r#"
        body {
            margin: 0px;
            font-family: sans-serif;
        }
        .btn {
            display: block;
            margin: 0 auto 50vh;
            padding: 1em 2em;
        }
        "#,
    );
}
