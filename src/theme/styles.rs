//! Global CSS styles for the library site.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #faf6ef;
  --paper-card: #ffffff;
  --paper-border: #e4dccc;

  /* INK (Text) */
  --ink: #2b2620;
  --ink-secondary: rgba(43, 38, 32, 0.72);
  --muted: rgba(43, 38, 32, 0.5);

  /* ACCENT */
  --leaf: #4a6b4a;
  --leaf-dark: #365236;
  --amber: #b07d2b;

  /* SEMANTIC */
  --danger: #b03030;
  --ok: #2f7a3d;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'PT Sans', 'Segoe UI', Arial, sans-serif;

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
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.5;
}

/* === Page Frame === */
.site {
  max-width: 1080px;
  margin: 0 auto;
  padding: 1.5rem 1rem 4rem;
}

.site-header {
  text-align: center;
  padding: 2rem 0 1rem;
}

.site-header h1 {
  font-family: var(--font-serif);
  font-size: 2.4rem;
  color: var(--leaf-dark);
}

.tagline {
  color: var(--ink-secondary);
  margin-top: 0.4rem;
}

.section {
  margin-top: 3rem;
}

.section h2 {
  font-family: var(--font-serif);
  font-size: 1.7rem;
  color: var(--leaf-dark);
  border-bottom: 2px solid var(--paper-border);
  padding-bottom: 0.4rem;
  margin-bottom: 1rem;
}

.section-note {
  color: var(--muted);
  margin: 0.5rem 0 1rem;
}

/* === Search === */
.search-row {
  margin-bottom: 1rem;
}

.search-input {
  width: 100%;
  max-width: 420px;
  padding: 0.55rem 0.8rem;
  border: 1px solid var(--paper-border);
  border-radius: 8px;
  font-size: 1rem;
  background: var(--paper-card);
  transition: border-color var(--transition-fast);
}

.search-input:focus {
  outline: none;
  border-color: var(--leaf);
}

/* === Catalog === */
.books-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1rem;
  max-height: 540px;
  overflow-y: auto;
}

.book-card {
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
  border-radius: 10px;
  padding: 1rem;
}

.book-card h3 {
  font-family: var(--font-serif);
  font-size: 1.15rem;
}

.book-card .author {
  color: var(--amber);
  font-size: 0.9rem;
  margin: 0.25rem 0 0.5rem;
}

.book-card .desc {
  color: var(--ink-secondary);
  font-size: 0.92rem;
}

/* === Staff === */
.staff-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1rem;
}

.staff-card {
  display: flex;
  gap: 0.9rem;
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
  border-radius: 10px;
  padding: 1rem;
}

.staff-avatar {
  flex: 0 0 64px;
  width: 64px;
  height: 64px;
  border-radius: 50%;
  background: var(--leaf);
  color: #fff;
  font-weight: bold;
  font-size: 1.3rem;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.staff-avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.staff-info h3 {
  font-size: 1.05rem;
}

.staff-info .role {
  color: var(--amber);
  font-size: 0.88rem;
}

.contact {
  margin: 0.4rem 0;
}

.contact-item {
  font-size: 0.9rem;
}

.contact-link {
  color: var(--leaf-dark);
  text-decoration: none;
}

.contact-link:hover {
  text-decoration: underline;
}

.bio {
  color: var(--ink-secondary);
  font-size: 0.9rem;
}

.details-button {
  margin-top: 0.5rem;
  background: none;
  border: 1px solid var(--leaf);
  color: var(--leaf-dark);
  border-radius: 6px;
  padding: 0.25rem 0.7rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.details-button:hover {
  background: rgba(74, 107, 74, 0.08);
}

/* === Gallery === */
.photos-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 0.8rem;
}

.photo-card {
  position: relative;
  border: none;
  border-radius: 10px;
  overflow: hidden;
  padding: 0;
  cursor: pointer;
  background: var(--paper-border);
  text-align: left;
}

.photo-card img {
  display: block;
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
}

.photo-card:focus-visible {
  outline: 3px solid var(--leaf);
}

.play-badge {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 52px;
  height: 52px;
  margin: -26px 0 0 -26px;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.55);
}

.play-badge::after {
  content: '';
  position: absolute;
  top: 14px;
  left: 19px;
  border-left: 18px solid #fff;
  border-top: 12px solid transparent;
  border-bottom: 12px solid transparent;
}

.photo-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 0.35rem 0.6rem;
  background: rgba(0, 0, 0, 0.45);
  color: #fff;
  font-size: 0.85rem;
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(20, 16, 10, 0.8);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal-content {
  position: relative;
  max-width: min(920px, 92vw);
  max-height: 90vh;
}

.modal-media {
  display: block;
  max-width: 100%;
  max-height: 78vh;
  border-radius: 8px;
  background: #000;
}

.modal-caption {
  color: #f2ede2;
  text-align: center;
  margin-top: 0.6rem;
  font-size: 0.95rem;
}

.modal-close,
.modal-prev,
.modal-next {
  position: absolute;
  background: rgba(0, 0, 0, 0.5);
  color: #fff;
  border: none;
  border-radius: 50%;
  width: 42px;
  height: 42px;
  font-size: 1.4rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.modal-close:hover,
.modal-prev:hover,
.modal-next:hover {
  background: rgba(0, 0, 0, 0.75);
}

.modal-close {
  top: -16px;
  right: -16px;
}

.modal-prev {
  left: -56px;
  top: 50%;
  transform: translateY(-50%);
}

.modal-next {
  right: -56px;
  top: 50%;
  transform: translateY(-50%);
}

/* === Staff Modal === */
.staff-modal {
  position: relative;
  background: var(--paper-card);
  border-radius: 12px;
  padding: 1.6rem;
  max-width: 420px;
  width: 92vw;
  text-align: center;
}

.staff-modal .modal-close {
  color: var(--ink);
  background: var(--paper-border);
}

.staff-modal-avatar {
  margin: 0 auto 0.8rem;
  width: 88px;
  height: 88px;
  flex: none;
  font-size: 1.8rem;
}

.staff-modal-name {
  font-family: var(--font-serif);
  font-size: 1.3rem;
}

.staff-modal-contacts {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin: 0.6rem 0;
  flex-wrap: wrap;
}

.staff-modal-bio {
  color: var(--ink-secondary);
  font-size: 0.92rem;
  text-align: left;
}

/* === Contact Form === */
.contact-form {
  max-width: 480px;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.contact-form label {
  font-size: 0.9rem;
  color: var(--ink-secondary);
  margin-top: 0.5rem;
}

.contact-form input,
.contact-form textarea {
  padding: 0.5rem 0.7rem;
  border: 1px solid var(--paper-border);
  border-radius: 8px;
  font-size: 1rem;
  background: var(--paper-card);
  font-family: inherit;
}

.contact-form textarea {
  min-height: 110px;
  resize: vertical;
}

.contact-form input:focus,
.contact-form textarea:focus {
  outline: none;
  border-color: var(--leaf);
}

.btn-primary {
  margin-top: 0.8rem;
  align-self: flex-start;
  background: var(--leaf);
  color: #fff;
  border: none;
  border-radius: 8px;
  padding: 0.55rem 1.3rem;
  font-size: 1rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary:hover {
  background: var(--leaf-dark);
}

.form-message {
  margin-top: 0.5rem;
}

.form-message.ok {
  color: var(--ok);
}

.form-message.error {
  color: var(--danger);
}
"#;
