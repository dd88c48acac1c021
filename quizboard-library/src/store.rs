//! The library store: a sorted in-memory index over a flat on-disk
//! directory of game entries.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use quizboard_core::{GameDescription, ProgressSink};
use quizboard_format::{BUNDLE_EXTENSION, MANIFEST_EXTENSION, manifest, native, validate};
use quizboard_scraper::{ImageCache, migrate_images};

use crate::error::LibraryError;

/// An explicit library handle over a pre-existing writable root
/// directory. All callers share one store by reference; there is no
/// process-wide index.
///
/// Every on-disk entry moves `absent → present(native)` or
/// `absent → present(non-native source, promoted on add)` and finally
/// `present → absent` on removal; promotion is one-way, an entry never
/// leaves the native format again.
pub struct Library {
    root: PathBuf,
    games: Vec<GameDescription>,
}

impl Library {
    /// Open a library over its root directory. The index starts empty;
    /// call [`Library::load_all`] to populate it from disk.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            games: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The indexed games, sorted by their natural ordering.
    pub fn games(&self) -> &[GameDescription] {
        &self.games
    }

    /// Whether the library already holds an entry for this game.
    ///
    /// Non-native games are keyed to the bundle name they would get when
    /// promoted, not to their original file name.
    pub fn exists(&self, game: &GameDescription) -> bool {
        self.disk_entry(game).exists()
    }

    /// Add a game to the library.
    ///
    /// A no-op when the game is not usable or already present. Native
    /// games are copied in verbatim (file, or bundle directory with all
    /// its assets). A non-native game is promoted: its images are
    /// migrated into a fresh `.jj` bundle with per-item progress pushed
    /// to `progress`, a native manifest is written, and the description
    /// is repointed and flipped to native.
    ///
    /// Returns the URLs of images that failed to migrate; failures do
    /// not abort the add, they set the game's sticky download-failure
    /// flag instead.
    pub fn add(
        &mut self,
        game: &mut GameDescription,
        cache: &ImageCache,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<String>, LibraryError> {
        if !game.usable {
            log::debug!("not adding unusable game {}", game.file_path.display());
            return Ok(Vec::new());
        }
        if self.exists(game) {
            log::debug!("library already contains {}", game.file_path.display());
            return Ok(Vec::new());
        }

        let failed = if game.native {
            match game.bundle_path.clone() {
                Some(bundle) => self.add_native_bundle(game, &bundle)?,
                None => self.add_native_file(game)?,
            }
            Vec::new()
        } else {
            self.promote(game, cache, progress)?
        };

        self.games.push(game.clone());
        self.sort();
        Ok(failed)
    }

    /// Remove a game's backing file or bundle and drop it from the index.
    ///
    /// The disk delete is best-effort: on an I/O error the entry still
    /// leaves the index, and disk and memory diverge until the next
    /// `load_all`. The running process treats the index as the source of
    /// truth.
    pub fn remove(&mut self, game: &GameDescription) {
        let outcome = match &game.bundle_path {
            Some(bundle) => std::fs::remove_dir_all(bundle),
            None => std::fs::remove_file(&game.file_path),
        };
        if let Err(err) = outcome {
            log::warn!(
                "could not delete {} from disk ({err}); dropping it from the index anyway",
                game.file_path.display()
            );
        }
        self.games.retain(|g| !g.same_source(game));
        self.sort();
    }

    /// Rebuild the index from the library directory.
    ///
    /// Directories containing a manifest are parsed as bundles, any
    /// other file as a single native game. Entries that fail to parse
    /// or validate are logged and skipped; the index is replaced
    /// wholesale.
    pub fn load_all(&mut self) -> Result<(), LibraryError> {
        let mut entries: Vec<_> = std::fs::read_dir(&self.root)?.flatten().collect();
        entries.sort_by_key(|e| e.path());

        let mut games = Vec::new();
        for entry in entries {
            let path = entry.path();
            let parsed = if path.is_dir() {
                match bundle_manifest(&path) {
                    Some(manifest_path) => native::parse(&manifest_path, Some(&path)),
                    None => {
                        log::debug!("skipping {}: no manifest inside", path.display());
                        continue;
                    }
                }
            } else {
                native::parse(&path, None)
            };

            let (game, result) = validate(parsed);
            if result.usable {
                games.push(game);
            } else {
                log::debug!("skipping unusable library entry {}", path.display());
            }
        }

        self.games = games;
        self.sort();
        Ok(())
    }

    /// The on-disk location this game occupies, or would occupy after
    /// promotion.
    fn disk_entry(&self, game: &GameDescription) -> PathBuf {
        if game.native {
            match &game.bundle_path {
                Some(bundle) => self.root.join(file_name_of(bundle)),
                None => self.root.join(file_name_of(&game.file_path)),
            }
        } else {
            let stem = file_stem_of(&game.file_path);
            self.root.join(format!("{stem}.{BUNDLE_EXTENSION}"))
        }
    }

    fn add_native_file(&self, game: &mut GameDescription) -> Result<(), LibraryError> {
        let dest = self.root.join(file_name_of(&game.file_path));
        std::fs::copy(&game.file_path, &dest)?;
        game.file_path = dest;
        Ok(())
    }

    fn add_native_bundle(
        &self,
        game: &mut GameDescription,
        source: &Path,
    ) -> Result<(), LibraryError> {
        let dest_dir = self.root.join(file_name_of(source));
        std::fs::create_dir_all(&dest_dir)?;

        let mut manifest_path = None;
        for entry in std::fs::read_dir(source)?.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let dest = dest_dir.join(entry.file_name());
            std::fs::copy(&path, &dest)?;
            if has_extension(&path, MANIFEST_EXTENSION) {
                manifest_path = Some(dest);
            }
        }

        let Some(manifest_path) = manifest_path else {
            return Err(LibraryError::MissingManifest {
                bundle: source.to_path_buf(),
            });
        };
        game.file_path = manifest_path;
        game.bundle_path = Some(dest_dir);
        Ok(())
    }

    /// Promote a non-native game into a fresh native bundle.
    fn promote(
        &self,
        game: &mut GameDescription,
        cache: &ImageCache,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<String>, LibraryError> {
        let stem = file_stem_of(&game.file_path);
        let bundle_dir = self.root.join(format!("{stem}.{BUNDLE_EXTENSION}"));
        std::fs::create_dir_all(&bundle_dir)?;

        let manifest_path = bundle_dir.join(format!("{stem}.{MANIFEST_EXTENSION}"));
        game.bundle_path = Some(bundle_dir.clone());
        game.file_path = manifest_path.clone();

        let failed = migrate_images(game, &bundle_dir, cache, progress);
        if !failed.is_empty() {
            // Sticky: recorded in the manifest so later loads can warn.
            game.image_download_failure = true;
        }

        manifest::write(game, &manifest_path)?;
        game.native = true;
        log::info!(
            "promoted {} into bundle {}",
            game.name,
            bundle_dir.display()
        );
        Ok(failed)
    }

    fn sort(&mut self) {
        self.games.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    }
}

/// Find the manifest file inside a bundle directory.
fn bundle_manifest(dir: &Path) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.is_file() && has_extension(path, MANIFEST_EXTENSION))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn file_name_of(path: &Path) -> OsString {
    path.file_name().map(OsString::from).unwrap_or_default()
}

fn file_stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
