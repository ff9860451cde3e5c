//! 미디어 선택 모델.
//!
//! 현재 선택된 파일, MIME 기반 종류 판별, 미리보기 캐시 파일 핸들.
//! 선택은 통째로 교체되며, 교체 시 이전 미리보기 리소스가 해제된다.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CoreError;

/// 미디어 종류 (플랫폼 허용 필터의 단위)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// 정지 이미지
    Image,
    /// 비디오
    Video,
}

impl MediaKind {
    /// 경로의 확장자에서 MIME 추론 → 미디어 종류
    ///
    /// image/* 또는 video/* 가 아니면 None.
    pub fn from_path(path: &Path) -> Option<MediaKind> {
        let mime = mime_guess::from_path(path).first()?;
        match mime.type_().as_str() {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    /// 로그/표시용 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// 미리보기 캐시 파일 핸들
///
/// 드롭 시 캐시 파일을 삭제한다. 선택이 교체되면 이전 핸들이 드롭되므로
/// 미리보기 리소스가 누수 없이 해제된다.
#[derive(Debug)]
pub struct PreviewHandle {
    path: PathBuf,
}

impl PreviewHandle {
    /// 캐시 파일 경로로 핸들 생성 (파일 소유권 이전)
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 미리보기 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // 이미 삭제된 경우 등 — 치명적이지 않음
            debug!("미리보기 파일 삭제 실패: {}: {e}", self.path.display());
        } else {
            debug!("미리보기 해제: {}", self.path.display());
        }
    }
}

/// 현재 선택된 미디어 파일
///
/// 이력에서 복원된 선택은 원본 바이너리가 없으므로 `source_path`와
/// `preview`가 모두 None이고, 뷰는 "미리보기 없음" 플레이스홀더로 강등된다.
#[derive(Debug)]
pub struct MediaSelection {
    /// 원본 파일 이름
    pub file_name: String,
    /// 원본 파일 경로 (이력 복원 시 None)
    pub source_path: Option<PathBuf>,
    /// 미디어 종류 (확장자로 판별 불가 시 None)
    pub kind: Option<MediaKind>,
    /// 미리보기 캐시 핸들
    pub preview: Option<PreviewHandle>,
}

impl MediaSelection {
    /// 로컬 파일 경로에서 새 선택 생성
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CoreError::Internal(format!("파일 이름 없음: {}", path.display())))?
            .to_string();

        Ok(Self {
            file_name,
            source_path: Some(path.to_path_buf()),
            kind: MediaKind::from_path(path),
            preview: None,
        })
    }

    /// 미리보기 핸들 부착 (builder 스타일)
    pub fn with_preview(mut self, preview: PreviewHandle) -> Self {
        self.preview = Some(preview);
        self
    }

    /// 이력 복원용 선택 — 파일 이름만 있고 바이너리/미리보기는 없음
    pub fn restored(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            source_path: None,
            kind: None,
            preview: None,
        }
    }

    /// 미리보기 가능 여부
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// 확장자 기반 전체 MIME 문자열 (multipart part용)
    pub fn mime(&self) -> Option<String> {
        let path = self.source_path.as_deref()?;
        mime_guess::from_path(path).first_raw().map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(
            MediaKind::from_path(Path::new("cat.jpg")),
            Some(MediaKind::Image)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("clip.mp4")),
            Some(MediaKind::Video)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("clip.mov")),
            Some(MediaKind::Video)
        );
        assert_eq!(MediaKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn selection_from_path() {
        let sel = MediaSelection::from_path(Path::new("/tmp/cat.jpg")).unwrap();
        assert_eq!(sel.file_name, "cat.jpg");
        assert_eq!(sel.kind, Some(MediaKind::Image));
        assert_eq!(sel.mime().as_deref(), Some("image/jpeg"));
        assert!(!sel.has_preview());
    }

    #[test]
    fn restored_selection_has_no_binary() {
        let sel = MediaSelection::restored("old.mp4");
        assert_eq!(sel.file_name, "old.mp4");
        assert!(sel.source_path.is_none());
        assert!(sel.preview.is_none());
        assert!(sel.mime().is_none());
    }

    #[test]
    fn preview_handle_removes_file_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.jpg");
        std::fs::write(&path, b"fake").unwrap();

        {
            let _handle = PreviewHandle::new(path.clone());
            assert!(path.exists());
        }
        assert!(!path.exists());
    }
}
