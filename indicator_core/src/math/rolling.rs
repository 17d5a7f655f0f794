/// Fixed-width window over a numeric sequence.
///
/// Statistics are `None` until the window holds exactly `window` values.
#[derive(Debug)]
pub struct RollingWindow {
    window: usize,
    values: Vec<f64>,
}

impl RollingWindow {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            values: Vec::with_capacity(window),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
        if self.values.len() > self.window {
            self.values.remove(0);
        }
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.window
    }

    pub fn mean(&self) -> Option<f64> {
        if !self.is_full() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.window as f64)
    }

    // Population convention, same window as mean()
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let variance = self.values.iter()
            .map(|&x| (x - mean).powi(2))
            .sum::<f64>() / self.window as f64;
        Some(variance.sqrt())
    }
}

/// Rolling mean of `data`, aligned with the input
pub fn rolling_mean(data: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut model = RollingWindow::new(window);
    data.iter()
        .map(|&x| {
            model.push(x);
            model.mean()
        })
        .collect()
}

/// Rolling mean and standard deviation over the same window
pub fn rolling_mean_std(data: &[f64], window: usize) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let mut model = RollingWindow::new(window);
    let mut means = Vec::with_capacity(data.len());
    let mut std_devs = Vec::with_capacity(data.len());
    for &x in data {
        model.push(x);
        means.push(model.mean());
        std_devs.push(model.std_dev());
    }
    (means, std_devs)
}
