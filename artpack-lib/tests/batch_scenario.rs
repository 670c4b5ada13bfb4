//! End-to-end batch: clear, run, archive, against an in-memory service.

use std::collections::{BTreeSet, HashMap};
use std::fs::{self, File};
use std::io::Cursor;
use std::path::Path;

use artpack_lib::{
    AssetRefs, MetadataSource, MovieId, Pipeline, PipelineError, RowOutcome, SourceError,
    TransformEngine, archive_today, workspace,
};
use image::{DynamicImage, Rgba, RgbaImage};

struct StubTmdb {
    ids: HashMap<&'static str, u64>,
    images: HashMap<&'static str, Vec<u8>>,
}

impl StubTmdb {
    fn new() -> Self {
        let mut images = HashMap::new();
        images.insert("/inception_backdrop.jpg", png(160, 90));
        images.insert("/inception_logo.png", png(80, 30));
        Self {
            ids: HashMap::from([("Inception", 27205)]),
            images,
        }
    }
}

impl MetadataSource for StubTmdb {
    fn resolve(&self, title: &str) -> Result<Option<MovieId>, SourceError> {
        Ok(self.ids.get(title).map(|&id| MovieId::from(id)))
    }

    fn locate(&self, id: &MovieId) -> Result<AssetRefs, SourceError> {
        if id.as_str() == "27205" {
            Ok(AssetRefs {
                backdrop: Some("/inception_backdrop.jpg".to_string()),
                logo: Some("/inception_logo.png".to_string()),
            })
        } else {
            Ok(AssetRefs::default())
        }
    }

    fn fetch_image(&self, file_path: &str) -> Result<Vec<u8>, SourceError> {
        self.images
            .get(file_path)
            .cloned()
            .ok_or_else(|| SourceError::unexpected_status(404, "missing"))
    }
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn zip_entries(path: &Path) -> BTreeSet<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

#[test]
fn test_three_row_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("TMDBImages");
    fs::create_dir_all(root.join("backdrop")).unwrap();
    fs::write(root.join("backdrop/Stale_240x135.png"), b"old run").unwrap();

    let cleared = workspace::clear(&root);
    assert!(cleared.is_clean());

    let pipeline = Pipeline::new(StubTmdb::new(), TransformEngine::with_default_recipes());
    let table = "Movie Name\nInception\n\"\"\nNotARealMovieXYZ123\n";
    let report = pipeline.run(table.as_bytes(), &root).unwrap();

    let rows = report.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].outcome.files().len(), 5);
    assert!(matches!(rows[1].outcome, RowOutcome::SkippedEmptyTitle));
    assert!(matches!(rows[2].outcome, RowOutcome::NotFound { .. }));
    assert_eq!(report.summary().to_string(), "1 of 3 movies processed");

    let summary = archive_today(&root, "TMDBImages").unwrap();
    let expected: BTreeSet<String> = [
        "backdrop/Inception_240x135.png",
        "backdrop/Inception_800x450.png",
        "backdrop/Inception_1280x480.png",
        "backdrop/Inception_640x360.webp",
        "logos/Inception.png",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(zip_entries(&summary.path), expected);
    assert!(summary.path.starts_with(&root));
}

#[test]
fn test_rerun_same_day_does_not_nest_archives() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("out");
    let pipeline = Pipeline::new(StubTmdb::new(), TransformEngine::with_default_recipes());

    for _ in 0..2 {
        pipeline
            .run("movie name\nInception\n".as_bytes(), &root)
            .unwrap();
        let summary = archive_today(&root, "TMDBImages").unwrap();
        assert_eq!(zip_entries(&summary.path).len(), 5);
    }
}

#[test]
fn test_missing_column_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("out");
    workspace::prepare(&root).unwrap();

    let pipeline = Pipeline::new(StubTmdb::new(), TransformEngine::with_default_recipes());
    let err = pipeline
        .run("film\nInception\n".as_bytes(), &root)
        .unwrap_err();

    assert!(matches!(err, PipelineError::MissingTitleColumn { .. }));
    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
}
