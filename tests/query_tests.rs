use kmlquery::config::EndpointConfig;
use kmlquery::query::{KmlForm, build_query_string, build_request_url, escape};

fn endpoint(base_url: &str) -> EndpointConfig {
    EndpointConfig {
        base_url: base_url.to_string(),
        ..EndpointConfig::default()
    }
}

#[test]
fn test_full_request_url() {
    let form = KmlForm {
        layer: "landsat8_nbar_16day".to_string(),
        region: "Canberra".to_string(),
        west: "148.76".to_string(),
        south: "-35.92".to_string(),
        east: "149.40".to_string(),
        north: "-35.12".to_string(),
        time: "2017-01-01".to_string(),
    };

    let url = build_request_url(&endpoint("http://gsky.example.org/cgi-bin"), &form, 2500.25);

    assert_eq!(
        url,
        "http://gsky.example.org/cgi-bin/google_earth.cgi?createKML+2500.25+\
         %26layer%3Dlandsat8_nbar_16day%26region%3DCanberra%26west%3D148.76\
         %26south%3D-35.92%26east%3D149.40%26north%3D-35.12%26time%3D2017-01-01"
    );
}

#[test]
fn test_custom_script_and_action() {
    let endpoint = EndpointConfig {
        base_url: "https://maps.example.org".to_string(),
        script: "/cgi/kml.cgi".to_string(),
        action: "renderKML".to_string(),
        cache_buster_max: 1.0,
    };

    let url = build_request_url(&endpoint, &KmlForm::default(), 0.5);
    assert!(url.starts_with("https://maps.example.org/cgi/kml.cgi?renderKML+0.5+%26layer%3D"));
}

#[test]
fn test_values_are_not_trimmed_or_normalised() {
    let form = KmlForm {
        region: " New South Wales ".to_string(),
        ..KmlForm::default()
    };
    assert!(build_query_string(&form).contains("%26region%3D%20New%20South%20Wales%20%26west"));
}

#[test]
fn test_non_latin_region() {
    let form = KmlForm {
        region: "Māori".to_string(),
        ..KmlForm::default()
    };
    // ā = U+0101
    assert!(build_query_string(&form).contains("%3DM%u0101ori%26"));
}

#[test]
fn test_escape_matches_legacy_table() {
    assert_eq!(escape("~!#$%^()[]{}|\\\"';,<>?`"), "%7E%21%23%24%25%5E%28%29%5B%5D%7B%7D%7C%5C%22%27%3B%2C%3C%3E%3F%60");
    assert_eq!(escape("\n\t"), "%0A%09");
}

#[test]
fn test_form_from_json() {
    let json = r#"{"layer":"l","region":"r","west":"1","south":"2","east":"3","north":"4","time":"t"}"#;
    let form: KmlForm = serde_json::from_str(json).unwrap();
    assert_eq!(form.north, "4");
    assert_eq!(
        build_query_string(&form),
        "%26layer%3Dl%26region%3Dr%26west%3D1%26south%3D2%26east%3D3%26north%3D4%26time%3Dt"
    );
}
