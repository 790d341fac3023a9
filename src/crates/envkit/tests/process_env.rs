// Tests against the real process environment.
// Every test uses its own ENVKIT_IT_* variables so they can run in parallel.

use envkit::{process, Directive, EnvSource, SystemEnv};

#[test]
fn test_check_writes_default_into_process_env() {
    std::env::remove_var("ENVKIT_IT_CHECK_LEVEL");

    process::check("envkit_it", "check_level", "debug", true, false).unwrap();
    assert_eq!(std::env::var("ENVKIT_IT_CHECK_LEVEL").unwrap(), "debug");

    std::env::remove_var("ENVKIT_IT_CHECK_LEVEL");
}

#[test]
fn test_check_many_process_env() {
    std::env::set_var("ENVKIT_IT_MANY_URL", "postgres://db");
    std::env::remove_var("ENVKIT_IT_MANY_POOL");
    std::env::remove_var("ENVKIT_IT_MANY_TOKEN");

    let directives = vec![
        Directive::required("many_url"),
        Directive::optional("many_pool").with_default("5"),
    ];
    process::check_many("envkit_it", &directives, true).unwrap();
    assert_eq!(process::get_int("envkit_it", "many_pool", 0), 5);

    let err = process::check_many("envkit_it", &[Directive::required("many_token")], false)
        .unwrap_err();
    assert!(err.is_required_not_set());

    std::env::remove_var("ENVKIT_IT_MANY_URL");
    std::env::remove_var("ENVKIT_IT_MANY_POOL");
}

#[test]
fn test_process_getters() {
    std::env::set_var("ENVKIT_IT_GET_NAME", "svc");
    std::env::set_var("ENVKIT_IT_GET_HOSTS", "a;b");
    std::env::set_var("ENVKIT_IT_GET_BIG", "5000000000");
    std::env::set_var("ENVKIT_IT_GET_PORTS", "80,x");
    std::env::set_var("ENVKIT_IT_GET_RATIO", "0.5");
    std::env::set_var("ENVKIT_IT_GET_ON", "True");

    assert_eq!(process::get_string("envkit_it", "get_name", ""), "svc");
    assert_eq!(
        process::get_string_list("envkit_it", "get_hosts", ";", &[]),
        vec!["a", "b"]
    );
    assert_eq!(process::get_int64("envkit_it", "get_big", 0), 5_000_000_000);
    assert_eq!(process::get_int_list("envkit_it", "get_ports", ",", &[]), vec![80, 0]);
    assert_eq!(process::get_float("envkit_it", "get_ratio", 1.0), 0.5);
    assert!(process::get_bool("envkit_it", "get_on", false));
    assert!(process::try_get_int_list("envkit_it", "get_ports", ",").is_err());
    assert_eq!(process::try_get::<u8>("envkit_it", "get_unset").unwrap(), None);

    for key in ["NAME", "HOSTS", "BIG", "PORTS", "RATIO", "ON"] {
        std::env::remove_var(format!("ENVKIT_IT_GET_{}", key));
    }
}

#[test]
fn test_check_rejects_unsettable_key() {
    let err = process::check("bad=prefix", "key", "x", false, false).unwrap_err();
    assert!(matches!(err, envkit::EnvError::SetFailed { .. }));
    assert!(SystemEnv.get("BAD=PREFIX_KEY").is_none());
}
