use super::*;

fn titles(csv: &str) -> Vec<RowInput> {
    read_titles(csv.as_bytes())
        .unwrap()
        .into_iter()
        .map(|r| r.input)
        .collect()
}

#[test]
fn test_header_normalized() {
    let rows = titles("  Movie Name  ,Year\nInception,2010\n");
    assert_eq!(rows, vec![RowInput::Title("Inception".to_string())]);
}

#[test]
fn test_header_with_bom() {
    let rows = titles("\u{feff}MOVIE NAME\nAlien\n");
    assert_eq!(rows, vec![RowInput::Title("Alien".to_string())]);
}

#[test]
fn test_title_column_not_first() {
    let rows = titles("year,movie name\n1979,Alien\n");
    assert_eq!(rows, vec![RowInput::Title("Alien".to_string())]);
}

#[test]
fn test_missing_column_lists_found_headers() {
    let err = read_titles("Title, Year\nAlien,1979\n".as_bytes()).unwrap_err();
    match err {
        PipelineError::MissingTitleColumn { column, found } => {
            assert_eq!(column, "movie name");
            assert_eq!(found, vec!["title", "year"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_underscore_header_not_accepted() {
    assert!(matches!(
        read_titles("movie_name\nAlien\n".as_bytes()),
        Err(PipelineError::MissingTitleColumn { .. })
    ));
}

#[test]
fn test_empty_input_is_missing_column() {
    assert!(matches!(
        read_titles("".as_bytes()),
        Err(PipelineError::MissingTitleColumn { .. })
    ));
}

#[test]
fn test_blank_and_short_rows() {
    let rows = titles("movie name,year\nInception,2010\n,2011\n   ,2012\n");
    assert_eq!(
        rows,
        vec![
            RowInput::Title("Inception".to_string()),
            RowInput::Blank,
            RowInput::Blank,
        ]
    );
}

#[test]
fn test_missing_cell_in_short_record() {
    let rows = titles("year,movie name\n2010\n");
    assert_eq!(rows, vec![RowInput::Blank]);
}

#[test]
fn test_title_kept_verbatim() {
    let rows = titles("movie name\n\" The Thing \"\n");
    assert_eq!(rows, vec![RowInput::Title(" The Thing ".to_string())]);
}

#[test]
fn test_row_numbers_are_one_based() {
    let rows = read_titles("movie name\nA\nB\n".as_bytes()).unwrap();
    assert_eq!(rows[0].row, 1);
    assert_eq!(rows[1].row, 2);
}

#[test]
fn test_invalid_utf8_record_is_malformed() {
    let mut data = b"movie name\nGood\n".to_vec();
    data.extend_from_slice(&[0xff, 0xfe, b'\n']);
    data.extend_from_slice(b"Also Good\n");
    let rows = read_titles(data.as_slice()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].input, RowInput::Title("Good".to_string()));
    assert!(matches!(rows[1].input, RowInput::Malformed(_)));
    assert_eq!(rows[2].input, RowInput::Title("Also Good".to_string()));
}
