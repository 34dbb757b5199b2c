#![no_main]

use libfuzzer_sys::fuzz_target;
use table_compare::{
    CompareOptions, FormatOptions, Method, TextCell, auto_align, common_rows, different_rows,
    pretty_format,
};

fn build_table(header: &[&str], data: &[u8]) -> Vec<Vec<TextCell>> {
    let ncols = header.len();
    let mut rows = vec![header.iter().map(|name| TextCell::new(*name)).collect::<Vec<_>>()];
    for chunk in data.chunks(ncols).take(64) {
        let mut row: Vec<TextCell> = chunk
            .iter()
            .map(|byte| TextCell::new((byte % 4).to_string()))
            .collect();
        // Short chunks with the high bit set stay ragged.
        if chunk.len() < ncols && chunk[0] & 0x80 == 0 {
            row.resize(ncols, TextCell::new(""));
        }
        rows.push(row);
    }
    rows
}

fuzz_target!(|data: &[u8]| {
    let selector = data.first().copied().unwrap_or(0);
    let split = data.get(1).copied().unwrap_or(0) as usize;
    let body = data.get(2..).unwrap_or(&[]);
    let split = split.min(body.len());

    let left = build_table(&["a", "b", "c"], &body[..split]);
    let right = build_table(&["c", "a", "b"], &body[split..]);

    let method = Method::ALL[(selector % 3) as usize];
    let mut options = CompareOptions {
        method,
        sort_indices: selector & 0x04 != 0,
        ..Default::default()
    };
    if selector & 0x08 != 0 {
        options.use_columns = Some(vec!["b".to_string()]);
    } else if selector & 0x10 != 0 {
        options.ignore_columns = Some(vec!["a".to_string(), "zzz".to_string()]);
    }

    let common = common_rows(&left, &right, &options);
    let different = different_rows(&left, &right, &options);
    if let (Ok(common), Ok(different)) = (&common, &different) {
        assert_eq!(common.left_indices.first(), Some(&0));
        assert_eq!(different.right_indices.first(), Some(&0));
        if method == Method::Match {
            assert_eq!(
                common.left_indices.len() + different.left_indices.len(),
                left.len() + 1
            );
        }
    }

    let _ = auto_align(&left, &right);
    let _ = pretty_format(
        &left,
        &FormatOptions {
            spaces: (selector % 4) as usize,
            max_col_length: Some(1 + (selector % 3) as usize),
        },
    );
});
