use armgraph::resolver::reference::{ReferenceResolver, ResolverRules, resolve};

/// Dependency strings seen in real deployment templates.
const SAMPLES: &[&str] = &[
    "[resourceId('Microsoft.Storage/storageAccounts', parameters('storageName'))]",
    "[resourceId('Microsoft.Network/networkInterfaces', concat(parameters('vmName'), '-nic'))]",
    "[concat('Microsoft.Network/virtualNetworks/', parameters('vnetName'))]",
    "/subscriptions/0000/resourceGroups/rg/providers/Microsoft.KeyVault/vaults/kv",
    "Microsoft.Web/serverfarms/plan",
    "[[unbalanced('",
    "",
];

#[test]
fn test_resolution_is_deterministic() {
    for raw in SAMPLES {
        assert_eq!(resolve(raw), resolve(raw));
    }
}

#[test]
fn test_resolution_is_idempotent() {
    for raw in SAMPLES {
        let once = resolve(raw);
        assert_eq!(resolve(&once), once, "resolving {once:?} again changed it");
    }
}

#[test]
fn test_resolved_strings_are_free_of_expression_syntax() {
    for raw in SAMPLES {
        let resolved = resolve(raw);
        for token in ["[", "]", "'", "\"", "(", ")", "\\", "resourceId", "parameters", "concat", "//"] {
            assert!(!resolved.contains(token), "{resolved:?} still contains {token:?}");
        }
    }
}

#[test]
fn test_expression_stripping_example() {
    assert_eq!(
        resolve("[resourceId('Microsoft.Storage/accounts', parameters('storageName'))]"),
        "Microsoft.Storage/accounts/storageName"
    );
}

#[test]
fn test_nested_concat_argument() {
    assert_eq!(
        resolve("[resourceId('Microsoft.Network/networkInterfaces', concat(parameters('vmName'), '-nic'))]"),
        "Microsoft.Network/networkInterfaces/vmName/-nic"
    );
}

#[test]
fn test_configured_tokens_extend_stripping() {
    let mut rules = ResolverRules::default();
    rules.function_tokens.push("variables".to_string());
    let resolver = ReferenceResolver::new(&rules);

    assert_eq!(
        resolver.resolve("[resourceId('Microsoft.Network/virtualNetworks', variables('vnet'))]"),
        "Microsoft.Network/virtualNetworks/vnet"
    );
}
