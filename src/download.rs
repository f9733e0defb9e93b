use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("Couldn't build file blob")]
    Blob,
    #[error("Couldn't create object URL")]
    ObjectUrl,
    #[error("Couldn't create download link")]
    Anchor,
}

/// Where a text download gets materialised; the browser in the app.
pub trait DownloadTarget {
    type Blob;

    fn make_blob(&self, mime: &str, contents: &str) -> Result<Self::Blob, DownloadError>;
    fn object_url(&self, blob: &Self::Blob) -> Result<String, DownloadError>;
    fn revoke(&self, url: &str);
    fn click_link(&self, url: &str, file_name: &str) -> Result<(), DownloadError>;
}

/// Object URL that runs `revoke` when dropped.
pub struct ObjectUrl<F: FnMut(&str)> {
    url: String,
    revoke: F,
}

impl<F: FnMut(&str)> ObjectUrl<F> {
    pub fn new(url: String, revoke: F) -> Self {
        Self { url, revoke }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl<F: FnMut(&str)> Drop for ObjectUrl<F> {
    fn drop(&mut self) {
        (self.revoke)(&self.url);
    }
}

/// Hand `contents` to the target as a file download.
///
/// The object URL is released on every path once created, including a failed click.
pub fn download_text<T: DownloadTarget>(
    target: &T,
    file_name: &str,
    mime: &str,
    contents: &str,
) -> Result<(), DownloadError> {
    let blob = target.make_blob(mime, contents)?;
    let url = ObjectUrl::new(target.object_url(&blob)?, |url| target.revoke(url));
    target.click_link(url.as_str(), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeTarget {
        fail_at: Option<DownloadError>,
        log: RefCell<Vec<String>>,
    }

    impl FakeTarget {
        fn failing(err: DownloadError) -> Self {
            Self {
                fail_at: Some(err),
                ..Default::default()
            }
        }

        fn check(&self, step: DownloadError) -> Result<(), DownloadError> {
            if self.fail_at.as_ref() == Some(&step) {
                Err(step)
            } else {
                Ok(())
            }
        }

        fn events(&self) -> Vec<String> {
            self.log.borrow().clone()
        }
    }

    impl DownloadTarget for FakeTarget {
        type Blob = String;

        fn make_blob(&self, mime: &str, contents: &str) -> Result<String, DownloadError> {
            self.check(DownloadError::Blob)?;
            self.log.borrow_mut().push(format!("blob {mime}"));
            Ok(contents.to_string())
        }

        fn object_url(&self, _blob: &String) -> Result<String, DownloadError> {
            self.check(DownloadError::ObjectUrl)?;
            self.log.borrow_mut().push("create blob:1".to_string());
            Ok("blob:1".to_string())
        }

        fn revoke(&self, url: &str) {
            self.log.borrow_mut().push(format!("revoke {url}"));
        }

        fn click_link(&self, url: &str, file_name: &str) -> Result<(), DownloadError> {
            self.check(DownloadError::Anchor)?;
            self.log.borrow_mut().push(format!("click {url} {file_name}"));
            Ok(())
        }
    }

    #[test]
    fn test_download_revokes_after_click() {
        let target = FakeTarget::default();
        download_text(&target, "a_brief.txt", "text/plain", "hi").unwrap();
        assert_eq!(
            target.events(),
            vec![
                "blob text/plain",
                "create blob:1",
                "click blob:1 a_brief.txt",
                "revoke blob:1",
            ]
        );
    }

    #[test]
    fn test_failed_click_still_revokes() {
        let target = FakeTarget::failing(DownloadError::Anchor);
        let res = download_text(&target, "a_brief.txt", "text/plain", "hi");
        assert_eq!(res, Err(DownloadError::Anchor));
        assert_eq!(
            target.events(),
            vec!["blob text/plain", "create blob:1", "revoke blob:1"]
        );
    }

    #[test]
    fn test_nothing_to_revoke_before_url_exists() {
        let target = FakeTarget::failing(DownloadError::ObjectUrl);
        let res = download_text(&target, "a_brief.txt", "text/plain", "hi");
        assert_eq!(res, Err(DownloadError::ObjectUrl));
        assert_eq!(target.events(), vec!["blob text/plain"]);

        let target = FakeTarget::failing(DownloadError::Blob);
        assert_eq!(
            download_text(&target, "a_brief.txt", "text/plain", "hi"),
            Err(DownloadError::Blob)
        );
        assert!(target.events().is_empty());
    }

    #[test]
    fn test_guard_revokes_once_on_drop() {
        let revoked = RefCell::new(Vec::new());
        {
            let url = ObjectUrl::new("blob:7".to_string(), |u| revoked.borrow_mut().push(u.to_string()));
            assert_eq!(url.as_str(), "blob:7");
            assert!(revoked.borrow().is_empty());
        }
        assert_eq!(*revoked.borrow(), vec!["blob:7".to_string()]);
    }
}
