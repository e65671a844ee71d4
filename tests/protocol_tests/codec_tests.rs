//! Codec Tests
//!
//! Tests for request encoding, reply decoding and payload splitting.

use std::path::PathBuf;

use bytes::Bytes;
use s3pool_client::protocol::{
    decode_reply, encode_args, encode_request, first_line, parse_glob_listing, parse_path_list,
    path_from_bytes, CommandType, Reply, ReplyFailure, Request,
};
use s3pool_client::PoolError;

// =============================================================================
// Helper Functions
// =============================================================================

/// Undo the request framing the simple way: strip `["` and `"]\n`, split on `","`
fn split_request_line(line: &str) -> Vec<String> {
    let inner = line
        .strip_prefix("[\"")
        .and_then(|s| s.strip_suffix("\"]\n"))
        .expect("request line framing");
    inner.split("\",\"").map(str::to_string).collect()
}

fn decode(raw: &'static [u8]) -> Reply {
    decode_reply(Bytes::from_static(raw))
}

// =============================================================================
// Request Encoding Tests
// =============================================================================

#[test]
fn test_encode_single_arg() {
    assert_eq!(encode_args(&["REFRESH"]).unwrap(), "[\"REFRESH\"]\n");
}

#[test]
fn test_encode_no_spaces_around_commas() {
    let line = encode_args(&["GLOB", "bucket", "dir/*.csv"]).unwrap();
    assert_eq!(line, "[\"GLOB\",\"bucket\",\"dir/*.csv\"]\n");
}

#[test]
fn test_encode_keeps_argument_order() {
    let args = vec![
        "PULL".to_string(),
        "{\"fmt\":\"csv\"}".replace('"', "'"),
        "/etc/schema.json".to_string(),
        "my-bucket".to_string(),
        "a/b/c.parquet".to_string(),
        "x y z".to_string(),
        String::new(),
        "tab\there".to_string(),
        "back\\slash".to_string(),
    ];
    let line = encode_args(args.as_slice()).unwrap();

    assert!(line.ends_with("]\n"));
    assert_eq!(line.matches('\n').count(), 1);
    assert_eq!(split_request_line(&line), args);
}

#[test]
fn test_encode_rejects_newline() {
    let err = encode_args(&["PULL", "spec", "schema", "bucket", "bad\nkey"]).unwrap_err();
    match err {
        PoolError::InvalidArgument(msg) => assert!(msg.contains("NEWLINE")),
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_encode_rejects_newline_in_command_name() {
    assert!(matches!(
        encode_args(&["PU\nLL"]),
        Err(PoolError::InvalidArgument(_))
    ));
}

#[test]
fn test_encode_rejects_double_quote() {
    let err = encode_args(&["GLOB", "bucket", "say \"hi\""]).unwrap_err();
    match err {
        PoolError::InvalidArgument(msg) => assert!(msg.contains("DQUOTE")),
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_encode_rejects_empty_list() {
    let args: [&str; 0] = [];
    assert!(matches!(
        encode_args(&args),
        Err(PoolError::InvalidArgument(_))
    ));
}

#[test]
fn test_encode_pull_request() {
    let request = Request::Pull {
        filespec: "spec".to_string(),
        schema: "schema.json".to_string(),
        bucket: "bkt".to_string(),
        keys: vec!["k1".to_string(), "k2".to_string()],
    };
    assert_eq!(request.command_type(), CommandType::Pull);
    assert_eq!(
        encode_request(&request).unwrap(),
        "[\"PULL\",\"spec\",\"schema.json\",\"bkt\",\"k1\",\"k2\"]\n"
    );
}

#[test]
fn test_encode_push_refresh_glob_requests() {
    let push = Request::Push {
        bucket: "bkt".to_string(),
        key: "out/key".to_string(),
        local_path: "/tmp/file".to_string(),
    };
    assert_eq!(
        encode_request(&push).unwrap(),
        "[\"PUSH\",\"bkt\",\"out/key\",\"/tmp/file\"]\n"
    );

    let refresh = Request::Refresh {
        bucket: "bkt".to_string(),
    };
    assert_eq!(encode_request(&refresh).unwrap(), "[\"REFRESH\",\"bkt\"]\n");

    let glob = Request::Glob {
        bucket: "bkt".to_string(),
        pattern: "*.csv".to_string(),
    };
    assert_eq!(
        encode_request(&glob).unwrap(),
        "[\"GLOB\",\"bkt\",\"*.csv\"]\n"
    );
}

// =============================================================================
// Reply Decoding Tests
// =============================================================================

#[test]
fn test_decode_ok() {
    assert_eq!(
        decode(b"OK\nhello\n"),
        Reply::Success(Bytes::from_static(b"hello\n"))
    );
}

#[test]
fn test_decode_ok_empty_payload() {
    let reply = decode(b"OK\n");
    assert!(reply.is_success());
    assert!(reply.into_result().unwrap().is_empty());
}

#[test]
fn test_decode_error() {
    let reply = decode(b"ERROR\nbad key\n");
    assert_eq!(
        reply,
        Reply::Failure(ReplyFailure::Remote("bad key\n".to_string()))
    );

    match reply.into_result() {
        Err(PoolError::Remote(msg)) => assert_eq!(msg, "bad key\n"),
        other => panic!("Expected Remote error, got {:?}", other),
    }
}

#[test]
fn test_decode_empty() {
    let reply = decode(b"");
    assert_eq!(reply, Reply::Failure(ReplyFailure::Empty));
    if let Reply::Failure(failure) = &reply {
        assert!(failure.message().starts_with("empty reply"));
    }
    assert!(matches!(reply.into_result(), Err(PoolError::EmptyReply)));
}

#[test]
fn test_decode_garbage() {
    let reply = decode(b"garbage");
    match &reply {
        Reply::Failure(failure) => {
            assert_eq!(failure.message(), "bad message from daemon: garbage");
        }
        _ => panic!("Expected failure"),
    }

    let err = reply.into_result().unwrap_err();
    assert_eq!(err.to_string(), "bad message from daemon: garbage");
}

#[test]
fn test_decode_prefix_without_newline_is_malformed() {
    assert!(matches!(
        decode(b"OK"),
        Reply::Failure(ReplyFailure::Malformed(_))
    ));
    assert!(matches!(
        decode(b"ERROR: nope"),
        Reply::Failure(ReplyFailure::Malformed(_))
    ));
    assert!(matches!(
        decode(b"ok\nlowercase"),
        Reply::Failure(ReplyFailure::Malformed(_))
    ));
}

#[test]
fn test_decode_is_total_over_arbitrary_bytes() {
    let inputs: Vec<Vec<u8>> = vec![
        vec![0xFF, 0xFE, 0x00],
        vec![b'O'],
        vec![b'E', b'R'],
        b"OK\n\xFF\xFE".to_vec(),
        b"ERROR\n\xC3".to_vec(),
        (0..=255).collect(),
    ];

    for input in inputs {
        match decode_reply(Bytes::from(input)) {
            Reply::Success(_) | Reply::Failure(_) => {}
        }
    }
}

// =============================================================================
// Payload Interpretation Tests
// =============================================================================

#[test]
fn test_first_line() {
    assert_eq!(first_line(b"/cache/abc.parquet\n"), b"/cache/abc.parquet");
    assert_eq!(first_line(b"/cache/a\n/cache/b\n\n"), b"/cache/a");
    assert_eq!(first_line(b"no-newline"), b"no-newline");
    assert_eq!(first_line(b""), b"");
}

#[test]
fn test_parse_path_list_stops_at_blank_line() {
    assert_eq!(
        parse_path_list(b"/a\n/b\n\n"),
        vec![PathBuf::from("/a"), PathBuf::from("/b")]
    );
    assert_eq!(parse_path_list(b"/a\n\n/ignored\n"), vec![PathBuf::from("/a")]);
}

#[test]
fn test_parse_path_list_without_terminator() {
    assert_eq!(
        parse_path_list(b"/a\n/b\n"),
        vec![PathBuf::from("/a"), PathBuf::from("/b")]
    );
    assert!(parse_path_list(b"").is_empty());
    assert!(parse_path_list(b"\n").is_empty());
}

#[cfg(unix)]
#[test]
fn test_paths_keep_non_utf8_bytes() {
    use std::os::unix::ffi::OsStrExt;

    let paths = parse_path_list(b"/cache/\xff\xfe.csv\n/cache/ok.csv\n\n");

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].as_os_str().as_bytes(), b"/cache/\xff\xfe.csv");
    assert_eq!(paths[1], PathBuf::from("/cache/ok.csv"));
    assert_eq!(
        path_from_bytes(first_line(b"/cache/\xff.csv\n")).as_os_str().as_bytes(),
        b"/cache/\xff.csv"
    );
}

#[test]
fn test_parse_glob_listing_consumes_everything() {
    let payload = Bytes::from_static(b"a/1.csv\na/2.csv\nb/3.csv\n");
    assert_eq!(
        parse_glob_listing(&payload),
        vec!["a/1.csv", "a/2.csv", "b/3.csv"]
    );
    assert!(parse_glob_listing(&Bytes::new()).is_empty());
}

#[test]
fn test_parse_glob_listing_keeps_lines_verbatim() {
    let payload = Bytes::from_static(b"a\r\n\nb\n");
    assert_eq!(parse_glob_listing(&payload), vec!["a\r", "", "b"]);

    // a lone newline is one empty key
    assert_eq!(parse_glob_listing(&Bytes::from_static(b"\n")), vec![""]);

    // last key without its newline
    assert_eq!(parse_glob_listing(&Bytes::from_static(b"x\ny")), vec!["x", "y"]);
}

#[test]
fn test_parse_glob_listing_non_utf8_key() {
    let payload = Bytes::from_static(b"dir/\xff.csv\n");
    let keys = parse_glob_listing(&payload);

    assert_eq!(keys.len(), 1);
    assert_eq!(&keys[0][..], b"dir/\xff.csv");
}
