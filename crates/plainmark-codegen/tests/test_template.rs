//! End-to-end tests from markup plus parser output.

use plainmark_ast::parse_json;
use plainmark_codegen::{generate_template_code, print_tree};
use plainmark_core::Error;

/// Parser output for `{#if ok}<b>{name}</b>{:else}none{/if}`.
const IF_ELSE_AST: &str = r#"{
  "start": 0, "end": 37, "type": "Fragment",
  "children": [{
    "start": 0, "end": 37, "type": "IfBlock",
    "expression": { "type": "Identifier", "start": 5, "end": 7, "name": "ok" },
    "children": [{
      "start": 8, "end": 21, "type": "Element", "name": "b", "attributes": [],
      "children": [{
        "start": 11, "end": 17, "type": "MustacheTag",
        "expression": { "type": "Identifier", "start": 12, "end": 16, "name": "name" }
      }]
    }],
    "else": {
      "start": 28, "end": 32, "type": "ElseBlock",
      "children": [{ "start": 28, "end": 32, "type": "Text", "raw": "none", "data": "none" }]
    }
  }]
}"#;

/// Parser output for `{#each items as item}{item}{:else}-{/each}`.
const EACH_ELSE_AST: &str = r#"{
  "start": 0, "end": 42, "type": "Fragment",
  "children": [{
    "start": 0, "end": 42, "type": "EachBlock",
    "expression": { "type": "Identifier", "start": 7, "end": 12, "name": "items" },
    "context": { "type": "Identifier", "start": 16, "end": 20, "name": "item" },
    "children": [{
      "start": 21, "end": 27, "type": "MustacheTag",
      "expression": { "type": "Identifier", "start": 22, "end": 26, "name": "item" }
    }],
    "else": {
      "start": 34, "end": 35, "type": "ElseBlock",
      "children": [{ "start": 34, "end": 35, "type": "Text", "raw": "-", "data": "-" }]
    }
  }]
}"#;

/// Parser output for `{#await p then v}{v}{/await}`.
const AWAIT_THEN_AST: &str = r#"{
  "start": 0, "end": 28, "type": "Fragment",
  "children": [{
    "start": 0, "end": 28, "type": "AwaitBlock",
    "expression": { "type": "Identifier", "start": 8, "end": 9, "name": "p" },
    "value": { "type": "Identifier", "start": 15, "end": 16, "name": "v" },
    "error": null,
    "pending": { "start": null, "end": null, "type": "PendingBlock", "children": [], "skip": true },
    "then": {
      "start": 17, "end": 20, "type": "ThenBlock", "skip": false,
      "children": [{
        "start": 17, "end": 20, "type": "MustacheTag",
        "expression": { "type": "Identifier", "start": 18, "end": 19, "name": "v" }
      }]
    },
    "catch": { "start": null, "end": null, "type": "CatchBlock", "children": [], "skip": true }
  }]
}"#;

#[test]
fn test_generate_from_markup_with_script() {
    let markup = "<script>\n  let ok = true;\n</script>{#if ok}<b>{name}</b>{:else}none{/if}";

    let code = generate_template_code(markup, |template| {
        assert_eq!(template, "{#if ok}<b>{name}</b>{:else}none{/if}");
        parse_json(IF_ELSE_AST)
    })
    .unwrap();

    assert_eq!(code, "if (ok) {\n    let var$$0 = name;\n}\nelse {\n}");
}

#[test]
fn test_generate_each_with_fallback_from_json() {
    let markup = "<!-- list -->{#each items as item}{item}{:else}-{/each}<style>p {}</style>";

    let code = generate_template_code(markup, |_| parse_json(EACH_ELSE_AST)).unwrap();

    insta::assert_snapshot!(code, @r"
if (items) {
    for (const item of items) {
        let var$$0 = item;
    }
}
else {
}
");
}

#[test]
fn test_generate_await_with_absent_branches() {
    let code = generate_template_code("{#await p then v}{v}{/await}", |_| parse_json(AWAIT_THEN_AST))
        .unwrap();

    insta::assert_snapshot!(code, @r"
try {
    const v = await p;
    let var$$0 = v;
}
catch {}
");
}

#[test]
fn test_generate_empty_template() {
    let code = generate_template_code("<script>let a;</script>", |template| {
        assert_eq!(template, "");
        parse_json(r#"{ "start": null, "end": null, "type": "Fragment", "children": [] }"#)
    })
    .unwrap();
    assert_eq!(code, "");
}

#[test]
fn test_parser_errors_propagate_unchanged() {
    let err = generate_template_code("{#if}", |_| Err(Error::Ast("unexpected `}`".to_string())))
        .unwrap_err();
    let Error::Ast(message) = err else { panic!("Expected the parser error") };
    assert_eq!(message, "unexpected `}`");
}

#[test]
fn test_tree_must_fit_stripped_text() {
    // The fixture's ranges run past the end of a shorter template.
    let err = generate_template_code("{#if ok}", |_| parse_json(IF_ELSE_AST)).unwrap_err();
    let Error::Span(message, span) = err else { panic!("Expected a span error") };
    assert!(message.contains("`Fragment` node range 0..37"), "{message}");
    assert_eq!(span.end, 8);
}

#[test]
fn test_print_tree() {
    let listing = print_tree("{#if ok}<b>{name}</b>{:else}none{/if}", |_| parse_json(IF_ELSE_AST)).unwrap();

    let expected = [
        " BEGIN Fragment (root)",
        "     BEGIN IfBlock (children)",
        "         BEGIN Element (children)",
        "             BEGIN MustacheTag (children)",
        "             END MustacheTag (children)",
        "         END Element (children)",
        "         BEGIN ElseBlock (else)",
        "             BEGIN Text (children)",
        "             END Text (children)",
        "         END ElseBlock (else)",
        "     END IfBlock (children)",
        " END Fragment (root)",
    ];
    assert_eq!(listing, expected.join("\n"));
}
