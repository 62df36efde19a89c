pub const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Launch Records Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
      body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 1100px; color: #222; }
      h1 { text-align: center; color: #503D36; font-size: 40px; }
      .chart { position: relative; height: 420px; margin: 1.5rem 0; }
      .slider { display: flex; gap: 1rem; align-items: center; }
      .slider input[type=range] { flex: 1; }
      .marks { display: flex; justify-content: space-between; font-size: 12px; color: #666; }
      select, input[type=search] { width: 100%; padding: 0.4rem; font-size: 15px; }
    </style>
  </head>
  <body>
    <h1 id="title">Launch Records Dashboard</h1>

    <div>
      <input type="search" id="site-search" placeholder="Select a Launch Site" />
      <select id="site-dropdown"></select>
    </div>
    <br />

    <div class="chart"><canvas id="success-pie-chart"></canvas></div>
    <br />

    <p>Payload range (Kg): <span id="payload-label"></span></p>
    <div class="slider" id="payload-slider">
      <input type="range" id="payload-low" />
      <input type="range" id="payload-high" />
    </div>
    <div class="marks" id="payload-marks"></div>

    <div class="chart"><canvas id="success-payload-scatter-chart"></canvas></div>

    <script>
      const PALETTE = ['#636efa', '#ef553b', '#00cc96', '#ab63fa', '#ffa15a', '#19d3f3', '#ff6692', '#b6e880'];
      let pieChart = null;
      let scatterChart = null;
      let siteOptions = [];
      let initialRange = null;
      let allSites = 'All Sites';

      const $ = (id) => document.getElementById(id);

      async function getJson(url) {
        const res = await fetch(url);
        if (!res.ok) throw new Error(url + ' -> ' + res.status);
        return res.json();
      }

      function fillDropdown(filter) {
        const select = $('site-dropdown');
        const current = select.value;
        select.innerHTML = '';
        for (const opt of siteOptions) {
          // 「All Sites」永遠保留，搜尋只篩選個別發射場
          const keep = opt.value === allSites || !filter || opt.label.toLowerCase().includes(filter.toLowerCase());
          if (!keep) continue;
          const el = document.createElement('option');
          el.value = opt.value;
          el.textContent = opt.label;
          select.appendChild(el);
        }
        select.value = [...select.options].some((o) => o.value === current) ? current : allSites;
        if (current && select.value !== current) {
          select.dispatchEvent(new Event('change'));
        }
      }

      function range() {
        if (initialRange) {
          $('payload-label').textContent = initialRange[0] + ' - ' + initialRange[1];
          return initialRange;
        }
        let low = Number($('payload-low').value);
        let high = Number($('payload-high').value);
        if (low > high) [low, high] = [high, low];
        $('payload-label').textContent = low + ' - ' + high;
        return [low, high];
      }

      async function refreshPie() {
        const site = $('site-dropdown').value;
        const fig = await getJson('/api/pie?site=' + encodeURIComponent(site));
        const data = {
          labels: fig.slices.map((s) => s.label),
          datasets: [{
            data: fig.slices.map((s) => s.value),
            backgroundColor: fig.slices.map((_, i) => PALETTE[i % PALETTE.length]),
          }],
        };
        if (pieChart) pieChart.destroy();
        pieChart = new Chart($('success-pie-chart'), {
          type: 'pie',
          data,
          options: { maintainAspectRatio: false, plugins: { title: { display: true, text: fig.title } } },
        });
      }

      async function refreshScatter() {
        const site = $('site-dropdown').value;
        const [low, high] = range();
        const url = '/api/scatter?site=' + encodeURIComponent(site) + '&low=' + low + '&high=' + high;
        const fig = await getJson(url);
        const datasets = fig.series.map((s, i) => ({
          label: s.booster_category,
          backgroundColor: PALETTE[i % PALETTE.length],
          data: s.points.map((p) => ({ x: p.payload_mass_kg, y: p.class, booster: p.booster_version })),
        }));
        if (scatterChart) scatterChart.destroy();
        scatterChart = new Chart($('success-payload-scatter-chart'), {
          type: 'scatter',
          data: { datasets },
          options: {
            maintainAspectRatio: false,
            scales: {
              x: { title: { display: true, text: fig.x_label } },
              y: { title: { display: true, text: fig.y_label }, min: -0.5, max: 1.5, ticks: { stepSize: 1 } },
            },
            plugins: {
              title: { display: true, text: fig.title },
              tooltip: {
                callbacks: {
                  label: (ctx) => ctx.raw.booster + ': ' + ctx.raw.x + ' kg, class ' + ctx.raw.y,
                },
              },
            },
          },
        });
      }

      async function init() {
        const layout = await getJson('/api/layout');
        document.title = layout.title;
        $('title').textContent = layout.title;

        siteOptions = layout.site_dropdown.options;
        allSites = layout.site_dropdown.value;
        $('site-search').placeholder = layout.site_dropdown.placeholder;
        $('site-search').hidden = !layout.site_dropdown.searchable;
        fillDropdown('');
        $('site-dropdown').value = layout.site_dropdown.value;

        const slider = layout.payload_slider;
        for (const id of ['payload-low', 'payload-high']) {
          const el = $(id);
          el.min = slider.min;
          el.max = slider.max;
          el.step = slider.step;
        }
        // 初始值是資料的最小/最大載重，不一定落在刻度上；移動滑桿前沿用原值
        initialRange = slider.value;
        $('payload-low').value = slider.value[0];
        $('payload-high').value = slider.value[1];
        $('payload-marks').innerHTML = slider.marks.map((m) => '<span>' + m + '</span>').join('');

        $('site-search').addEventListener('input', (e) => fillDropdown(e.target.value));
        $('site-dropdown').addEventListener('change', () => { refreshPie(); refreshScatter(); });
        $('payload-low').addEventListener('change', refreshScatter);
        $('payload-high').addEventListener('change', refreshScatter);
        for (const id of ['payload-low', 'payload-high']) {
          $(id).addEventListener('input', () => { initialRange = null; range(); });
        }

        await Promise.all([refreshPie(), refreshScatter()]);
      }

      init().catch((err) => console.error(err));
    </script>
  </body>
</html>
"#;
