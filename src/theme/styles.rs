//! Global CSS styles for APOD Gallery.
//!
//! Deep-space palette: near-black background, NASA blue accents, warm
//! highlight for titles.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SPACE (Backgrounds) */
  --space-black: #05070f;
  --space-panel: #0e1324;
  --space-border: #1f2740;

  /* NASA BLUE (Links, Actions) */
  --nasa-blue: #0b3d91;
  --nasa-blue-bright: #3d7eff;
  --nasa-blue-glow: rgba(61, 126, 255, 0.3);

  /* NASA RED (Highlights) */
  --nasa-red: #fc3d21;

  /* TEXT */
  --text-primary: #f5f7ff;
  --text-secondary: rgba(245, 247, 255, 0.75);
  --text-muted: rgba(245, 247, 255, 0.5);

  /* Typography */
  --font-sans: 'Helvetica Neue', Helvetica, Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--space-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

.page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  height: 100vh;
  overflow-y: auto;
}

/* Overlay open: background must not scroll */
.page--locked {
  overflow: hidden;
}

/* === Header === */
.site-header {
  text-align: center;
  margin-bottom: 2rem;
}

.page-title {
  font-size: 2.25rem;
  letter-spacing: 0.05em;
}

.tagline {
  color: var(--text-secondary);
}

/* === Buttons === */
.btn-primary, .btn-secondary {
  font-family: var(--font-sans);
  font-size: 1rem;
  padding: 0.6rem 1.4rem;
  border-radius: 6px;
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: var(--nasa-blue);
  color: var(--text-primary);
  border: 1px solid var(--nasa-blue-bright);
}

.btn-primary:hover {
  background: var(--nasa-blue-bright);
  box-shadow: 0 0 12px var(--nasa-blue-glow);
}

.btn-secondary {
  background: transparent;
  color: var(--nasa-blue-bright);
  border: 1px solid var(--nasa-blue-bright);
}

/* === Space Fact === */
.space-fact {
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-left: 4px solid var(--nasa-red);
  border-radius: 8px;
  padding: 1.25rem 1.5rem;
  margin-bottom: 1.5rem;
}

.space-fact-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.space-fact-header h2 {
  font-size: 1.1rem;
}

.space-fact-text {
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
  opacity: 1;
  transition: opacity var(--transition-fast);
}

.space-fact-text--dimmed {
  opacity: 0.5;
}

/* === Filters === */
.filters {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 2rem;
}

.date-field {
  display: flex;
  flex-direction: column;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.date-field input {
  margin-top: 0.25rem;
  padding: 0.5rem;
  border-radius: 6px;
  border: 1px solid var(--space-border);
  background: var(--space-panel);
  color: var(--text-primary);
}

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.placeholder {
  grid-column: 1 / -1;
  text-align: center;
  padding: 4rem 1rem;
  color: var(--text-muted);
}

.placeholder-icon {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.gallery-item {
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 8px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.gallery-item:hover {
  transform: translateY(-4px) scale(1.02);
  box-shadow: 0 8px 24px var(--nasa-blue-glow);
}

.gallery-image {
  width: 100%;
  height: 220px;
  object-fit: cover;
  display: block;
  background: var(--space-black);
}

.gallery-info {
  padding: 0.75rem 1rem;
}

.gallery-title {
  font-size: 1rem;
  margin-bottom: 0.25rem;
}

.gallery-date {
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Video cards === */
.video-preview {
  position: relative;
}

.video-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  background: rgba(0, 0, 0, 0.35);
}

.video-label {
  font-size: 0.8rem;
  background: rgba(0, 0, 0, 0.7);
  padding: 0.2rem 0.6rem;
  border-radius: 4px;
}

.video-placeholder {
  height: 220px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  background: linear-gradient(135deg, var(--nasa-blue), var(--space-black));
}

.video-icon {
  font-size: 2.5rem;
}

.video-link, .external-link, .video-button {
  color: var(--nasa-blue-bright);
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.85);
  overflow-y: auto;
  z-index: 1000;
  outline: none;
}

.modal-content {
  position: relative;
  max-width: 900px;
  margin: 3rem auto;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 10px;
  overflow: hidden;
}

.modal-close {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 2rem;
  cursor: pointer;
  z-index: 1;
}

.modal-image {
  width: 100%;
  max-height: 70vh;
  object-fit: contain;
  display: block;
  background: var(--space-black);
}

.modal-info {
  padding: 1.25rem 1.5rem 1.5rem;
}

.modal-title {
  margin-bottom: 0.25rem;
}

.modal-date {
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.modal-copyright {
  font-size: 0.85rem;
  color: var(--text-muted);
  margin: -0.75rem 0 1rem;
}

.modal-explanation {
  color: var(--text-secondary);
}

.video-links {
  padding: 0.75rem 1.5rem 0;
}

.video-fallback {
  text-align: center;
  padding: 3rem 1.5rem;
}

.video-icon-large {
  font-size: 4rem;
  margin-bottom: 0.75rem;
}

.video-button {
  display: inline-block;
  margin-top: 1rem;
  padding: 0.6rem 1.4rem;
  border: 1px solid var(--nasa-blue-bright);
  border-radius: 6px;
  text-decoration: none;
}
"#;
