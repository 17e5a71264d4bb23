//! Static-hosting artifact generator.
//!
//! The site itself is served as static files; the host needs an `.htaccess`
//! with SPA rewrite rules and security headers, plus a deploy checklist.
//! Pure string templating, run at build/deploy time, not part of the
//! request path.

use std::path::Path;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct HostingConfig {
    pub domain: String,
    /// Cache-Control for static assets.
    pub asset_cache_control: String,
    /// Emit the front-controller rewrite so client-side routes resolve.
    pub spa_rewrite: bool,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            domain: "techdevclub.com".to_string(),
            asset_cache_control: "max-age=31536000, public".to_string(),
            spa_rewrite: true,
        }
    }
}

impl HostingConfig {
    /// Render the `.htaccess` consumed by the static host at serve time.
    pub fn htaccess(&self) -> String {
        let mut out = String::from("# Enable Rewrite Engine\nRewriteEngine On\n");

        if self.spa_rewrite {
            out.push_str(
                "\n# Handle Front Controller Pattern for SPA\n\
                 RewriteCond %{REQUEST_FILENAME} !-f\n\
                 RewriteCond %{REQUEST_FILENAME} !-d\n\
                 RewriteRule ^(.*)$ /index.html [L,QSA]\n",
            );
        }

        out.push_str(&format!(
            "\n# Set security headers\n\
             <IfModule mod_headers.c>\n  \
             Header set X-XSS-Protection \"1; mode=block\"\n  \
             Header set X-Content-Type-Options \"nosniff\"\n  \
             Header set Referrer-Policy \"strict-origin-when-cross-origin\"\n  \
             Header set Content-Security-Policy \"default-src 'self'; script-src 'self' 'unsafe-inline' https://www.googletagmanager.com; style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; img-src 'self' data: https://openweathermap.org; font-src 'self' https://fonts.gstatic.com; connect-src 'self'; object-src 'none'\"\n\n  \
             # Cache control for static assets\n  \
             <FilesMatch \"\\.(ico|pdf|jpg|jpeg|png|webp|gif|html|htm|xml|txt|css|js)$\">\n    \
             Header set Cache-Control \"{}\"\n  \
             </FilesMatch>\n\
             </IfModule>\n",
            self.asset_cache_control
        ));

        out.push_str(
            "\n# Compress text files\n\
             <IfModule mod_deflate.c>\n  \
             AddOutputFilterByType DEFLATE text/html text/plain text/xml text/css application/javascript application/json\n\
             </IfModule>\n\
             \n# Set correct MIME types\n\
             <IfModule mod_mime.c>\n  \
             AddType application/javascript .js\n  \
             AddType text/css .css\n  \
             AddType image/svg+xml .svg\n  \
             AddType application/json .json\n\
             </IfModule>\n",
        );

        out
    }

    /// Render the human deploy checklist that ships next to the artifacts.
    pub fn checklist(&self) -> String {
        format!(
            "TECH DEV CLUB - DEPLOYMENT CHECKLIST\n\
             ====================================\n\n\
             1. UPLOAD FILES\n   \
             - Upload the dist directory to the host's public folder\n   \
             - Include the .htaccess file (it may be hidden)\n\n\
             2. DOMAIN SETUP\n   \
             - Point {domain} at the host\n   \
             - Enable the SSL certificate for HTTPS\n\n\
             3. TESTING\n   \
             - Visit a deep route directly to confirm the SPA rewrite works\n   \
             - Verify API endpoints and forms\n\n\
             If routes 404, the .htaccess was not uploaded.\n",
            domain = self.domain
        )
    }

    /// Write both artifacts into the deploy directory.
    pub fn write_artifacts(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(".htaccess"), self.htaccess())?;
        std::fs::write(dir.join("deploy-checklist.txt"), self.checklist())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn htaccess_contains_rewrite_and_headers() {
        let htaccess = HostingConfig::default().htaccess();
        assert!(htaccess.contains("RewriteEngine On"));
        assert!(htaccess.contains("RewriteRule ^(.*)$ /index.html [L,QSA]"));
        assert!(htaccess.contains("X-Content-Type-Options \"nosniff\""));
        assert!(htaccess.contains("max-age=31536000, public"));
    }

    #[test]
    fn rewrite_block_can_be_disabled() {
        let config = HostingConfig {
            spa_rewrite: false,
            ..Default::default()
        };
        assert!(!config.htaccess().contains("RewriteRule ^(.*)$"));
    }

    #[test]
    fn writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        HostingConfig::default().write_artifacts(dir.path()).unwrap();
        assert!(dir.path().join(".htaccess").exists());
        let checklist = std::fs::read_to_string(dir.path().join("deploy-checklist.txt")).unwrap();
        assert!(checklist.contains("techdevclub.com"));
    }
}
