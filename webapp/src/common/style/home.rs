pub const PAGE_STYLES: &str = r#"
/* Shared page layout */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

section {
  padding: var(--space-12) 0;
}

.muted {
  color: var(--text-secondary);
}

.centered {
  text-align: center;
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

/* Hero */
.hero {
  padding: var(--space-16) 0;
}

.hero-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
  align-items: center;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  line-height: 1.1;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-4);
  background: linear-gradient(135deg, var(--primary), var(--accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.hero-tagline {
  font-size: 1.75rem;
  margin-bottom: var(--space-4);
}

.hero-actions,
.contact-links {
  display: flex;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.hero-portrait {
  display: flex;
  justify-content: center;
}

.portrait-ring {
  width: 320px;
  height: 320px;
  padding: 6px;
  border-radius: var(--radius-full);
  background: linear-gradient(135deg, var(--primary), var(--accent));
}

.portrait-ring img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: var(--radius-full);
}

/* About */
.about-section {
  background-color: var(--surface);
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
  align-items: center;
}

.about-image img {
  width: 100%;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
}

/* Portfolio */
.resume-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
}

.resume-heading {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.resume-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.artist-grid,
.blog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-6);
}

.highlight-list,
.certification-list {
  padding-left: var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Blog */
.post-card.featured {
  margin-bottom: var(--space-8);
  border-color: var(--primary-light);
}

.post-card .btn {
  margin-top: var(--space-4);
}

/* Entrances */
.slide-in-left  { animation: slide-in-left 0.6s var(--easing-standard) both; }
.slide-in-right { animation: slide-in-right 0.6s var(--easing-standard) both; }
.fade-up        { animation: fade-up 0.6s var(--easing-standard) both; }
.spin-in        { animation: spin-in 0.8s var(--easing-standard) both; }

@keyframes slide-in-left {
  from { opacity: 0; transform: translateX(-40px); }
  to   { opacity: 1; transform: none; }
}

@keyframes slide-in-right {
  from { opacity: 0; transform: translateX(40px); }
  to   { opacity: 1; transform: none; }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to   { opacity: 1; transform: none; }
}

@media (max-width: 768px) {
  .hero-grid,
  .about-grid,
  .resume-grid {
    grid-template-columns: 1fr;
  }

  .hero-title {
    font-size: 2.5rem;
  }

  .portrait-ring {
    width: 240px;
    height: 240px;
  }
}
"#;
